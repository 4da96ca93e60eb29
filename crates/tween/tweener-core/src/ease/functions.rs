//! Curve math for every easing family.
//!
//! Each family exposes an `*_in` and `*_out` form; `in_out` and `out_in` build the
//! two split variants from them. The step ("warp") family has hand-written
//! thresholds for all four variants.

use std::f32::consts::{FRAC_PI_2, LN_2, PI};

/// Tolerance used by the boundary pins.
pub const PIN_EPSILON: f32 = 1e-6;

/// `10 * ln(2)`: `exp(LN2_TEN * x) == 2^(10x)`.
const LN2_TEN: f32 = 10.0 * LN_2;

/// Back-family overshoot.
pub const BACK_OVERSHOOT: f32 = 1.70158;

pub const ELASTIC_AMPLITUDE: f32 = 1.0;
pub const ELASTIC_PERIOD: f32 = 0.3;

const BOUNCE_SCALE: f32 = 7.5625;
const BOUNCE_DIV: f32 = 2.75;

#[inline]
fn near(a: f32, b: f32) -> bool {
    (a - b).abs() <= PIN_EPSILON
}

/// Returns `Some(0.0)`/`Some(1.0)` when `t` sits on an endpoint.
#[inline]
fn pinned(t: f32) -> Option<f32> {
    if near(t, 0.0) {
        Some(0.0)
    } else if near(t, 1.0) {
        Some(1.0)
    } else {
        None
    }
}

/// First half runs `ease_in` over [0, 0.5], second half `ease_out` over [0.5, 1].
#[inline]
pub fn in_out(ease_in: fn(f32) -> f32, ease_out: fn(f32) -> f32, t: f32) -> f32 {
    if t < 0.5 {
        0.5 * ease_in(t * 2.0)
    } else {
        0.5 * ease_out(t * 2.0 - 1.0) + 0.5
    }
}

/// First half runs `ease_out` over [0, 0.5], second half `ease_in` over [0.5, 1].
#[inline]
pub fn out_in(ease_in: fn(f32) -> f32, ease_out: fn(f32) -> f32, t: f32) -> f32 {
    if t < 0.5 {
        0.5 * ease_out(t * 2.0)
    } else {
        0.5 * ease_in(t * 2.0 - 1.0) + 0.5
    }
}

#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

// Sine

pub fn sine_in(t: f32) -> f32 {
    pinned(t).unwrap_or_else(|| 1.0 - (t * FRAC_PI_2).cos())
}

pub fn sine_out(t: f32) -> f32 {
    pinned(t).unwrap_or_else(|| (t * FRAC_PI_2).sin())
}

// Polynomials

#[inline]
pub fn quad_in(t: f32) -> f32 {
    t * t
}

#[inline]
pub fn quad_out(t: f32) -> f32 {
    -t * (t - 2.0)
}

#[inline]
pub fn cubic_in(t: f32) -> f32 {
    t * t * t
}

#[inline]
pub fn cubic_out(t: f32) -> f32 {
    let u = t - 1.0;
    u * u * u + 1.0
}

#[inline]
pub fn quart_in(t: f32) -> f32 {
    let t2 = t * t;
    t2 * t2
}

#[inline]
pub fn quart_out(t: f32) -> f32 {
    let u = t - 1.0;
    let u2 = u * u;
    1.0 - u2 * u2
}

#[inline]
pub fn quint_in(t: f32) -> f32 {
    let t2 = t * t;
    t2 * t2 * t
}

#[inline]
pub fn quint_out(t: f32) -> f32 {
    let u = t - 1.0;
    let u2 = u * u;
    u2 * u2 * u + 1.0
}

// Exponential

/// `2^(10(t-1))`, pinned so that `t = 0` yields exactly 0 instead of `2^-10`.
pub fn expo_in(t: f32) -> f32 {
    pinned(t).unwrap_or_else(|| (LN2_TEN * (t - 1.0)).exp())
}

pub fn expo_out(t: f32) -> f32 {
    pinned(t).unwrap_or_else(|| 1.0 - (-LN2_TEN * t).exp())
}

// Circular

/// Outside `[-1, 1]` the root is undefined; those inputs collapse to 0.
pub fn circ_in(t: f32) -> f32 {
    if !(-1.0..=1.0).contains(&t) {
        return 0.0;
    }
    1.0 - (1.0 - t * t).sqrt()
}

/// Outside `[0, 2]` the root is undefined; those inputs collapse to 0.
pub fn circ_out(t: f32) -> f32 {
    if !(0.0..=2.0).contains(&t) {
        return 0.0;
    }
    (t * (2.0 - t)).sqrt()
}

/// Composed split variant; below `-0.5` or above `1.5` it holds at the midpoint.
pub fn circ_in_out(t: f32) -> f32 {
    if !(-0.5..=1.5).contains(&t) {
        return 0.5;
    }
    in_out(circ_in, circ_out, t)
}

/// Composed split variant, clamped to 0 below the domain and 1 above it.
pub fn circ_out_in(t: f32) -> f32 {
    if t < 0.0 {
        0.0
    } else if t > 1.0 {
        1.0
    } else {
        out_in(circ_in, circ_out, t)
    }
}

// Bounce

/// Four parabolic arcs split at `1/2.75`, `2/2.75` and `2.5/2.75`.
/// A `t` exactly on a split belongs to the lower arc.
pub fn bounce_out(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_DIV {
        BOUNCE_SCALE * t * t
    } else if t < 2.0 / BOUNCE_DIV {
        let u = t - 1.5 / BOUNCE_DIV;
        BOUNCE_SCALE * u * u + 0.75
    } else if t < 2.5 / BOUNCE_DIV {
        let u = t - 2.25 / BOUNCE_DIV;
        BOUNCE_SCALE * u * u + 0.9375
    } else {
        let u = t - 2.625 / BOUNCE_DIV;
        BOUNCE_SCALE * u * u + 0.984375
    }
}

pub fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}

// Back

pub fn back_in(t: f32) -> f32 {
    pinned(t).unwrap_or_else(|| t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT))
}

pub fn back_out(t: f32) -> f32 {
    pinned(t).unwrap_or_else(|| {
        let u = t - 1.0;
        u * u * ((BACK_OVERSHOOT + 1.0) * u + BACK_OVERSHOOT) + 1.0
    })
}

// Elastic

#[inline]
fn elastic_phase(u: f32) -> f32 {
    let s = ELASTIC_PERIOD / 4.0;
    ((u - s) * (2.0 * PI) / ELASTIC_PERIOD).sin()
}

pub fn elastic_in(t: f32) -> f32 {
    pinned(t).unwrap_or_else(|| {
        let u = t - 1.0;
        -(ELASTIC_AMPLITUDE * (LN2_TEN * u).exp() * elastic_phase(u))
    })
}

pub fn elastic_out(t: f32) -> f32 {
    pinned(t).unwrap_or_else(|| ELASTIC_AMPLITUDE * (-LN2_TEN * t).exp() * elastic_phase(t) + 1.0)
}

// Warp (hard steps). Each variant has its own thresholds.

#[inline]
pub fn warp_in(t: f32) -> f32 {
    if t < 1.0 {
        0.0
    } else {
        1.0
    }
}

#[inline]
pub fn warp_out(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else {
        1.0
    }
}

#[inline]
pub fn warp_in_out(t: f32) -> f32 {
    if t < 0.5 {
        0.0
    } else {
        1.0
    }
}

#[inline]
pub fn warp_out_in(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else if t < 1.0 {
        0.5
    } else {
        1.0
    }
}
