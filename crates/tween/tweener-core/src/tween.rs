//! A single in-flight scalar tween.

use serde::{Deserialize, Serialize};

use crate::ease::Easing;
use crate::ids::TweenId;
use crate::property::Property;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One property animation from `start` to `end` over `duration` seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub id: TweenId,
    pub property: Property,
    pub easing: Easing,
    /// Seconds since the tween started, clamped to `duration`.
    pub elapsed: f32,
    pub duration: f32,
    pub start: f32,
    pub end: f32,
    /// Last value produced by [`Tween::step`].
    pub value: f32,
    #[serde(default)]
    pub finished: bool,
}

impl Tween {
    pub fn new(
        id: TweenId,
        property: Property,
        start: f32,
        end: f32,
        duration: f32,
        easing: Easing,
    ) -> Self {
        Self {
            id,
            property,
            easing,
            elapsed: 0.0,
            duration,
            start,
            end,
            value: start,
            finished: false,
        }
    }

    /// Normalized time in `[0, 1]`.
    #[inline]
    pub fn normalized_time(&self) -> f32 {
        self.elapsed / self.duration
    }

    /// Advance by `dt` seconds and return the new value.
    ///
    /// Once `elapsed` reaches `duration` the tween is marked finished and its value is
    /// exactly `end`, whatever the curve returns at `t = 1`.
    pub fn step(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).max(0.0);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.finished = true;
            self.value = self.end;
            return self.value;
        }
        self.value = self.sample();
        self.value
    }

    /// Value at the current elapsed time, without advancing.
    pub fn sample(&self) -> f32 {
        if self.finished {
            return self.end;
        }
        let progress = self.easing.evaluate(self.normalized_time());
        lerp_f32(self.start, self.end, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_clamps_and_forces_end() {
        let mut t = Tween::new(TweenId(0), Property::PositionX, 0.0, 10.0, 2.0, Easing::Linear);
        assert_eq!(t.step(1.0), 5.0);
        assert!(!t.finished);
        assert_eq!(t.step(5.0), 10.0);
        assert!(t.finished);
        assert_eq!(t.elapsed, 2.0);
    }

    #[test]
    fn negative_dt_never_rewinds_past_start() {
        let mut t = Tween::new(TweenId(0), Property::ScaleX, 1.0, 2.0, 1.0, Easing::QuadIn);
        assert_eq!(t.step(-0.5), 1.0);
        assert_eq!(t.elapsed, 0.0);
    }

    #[test]
    fn sample_follows_a_moved_start() {
        let mut t = Tween::new(TweenId(0), Property::Opacity, 1.0, 0.0, 1.0, Easing::Linear);
        assert_eq!(t.step(0.5), 0.5);
        t.start = 0.4;
        assert!((t.sample() - 0.2).abs() < 1e-6);
        assert_eq!(t.elapsed, 0.5);
    }

    #[test]
    fn overshooting_curve_passes_through() {
        let mut t = Tween::new(TweenId(0), Property::ScaleY, 0.0, 1.0, 1.0, Easing::BackOut);
        let v = t.step(0.8);
        assert!(v > 1.0, "back-out should overshoot, got {v}");
    }
}
