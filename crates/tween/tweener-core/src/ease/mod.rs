//! Easing catalog and dispatch.
//!
//! An [`Easing`] names one curve: `Linear`, or one of eleven families in four
//! directions. [`Easing::evaluate`] remaps normalized time `t` to normalized
//! progress. Back and elastic curves leave `[0, 1]` mid-curve.

pub mod functions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;
use functions as f;

/// Curve family.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EaseFamily {
    Linear,
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Bounce,
    Back,
    Elastic,
    Warp,
}

/// Directional variant of a family.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
    OutIn,
}

macro_rules! easing_catalog {
    ($($variant:ident => ($family:ident, $dir:ident)),+ $(,)?) => {
        /// Curve identifier.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
        pub enum Easing {
            $($variant),+
        }

        impl Easing {
            /// Every curve, in catalog order. The index is the numeric code used by `TryFrom<u8>`.
            pub const ALL: &'static [Easing] = &[$(Easing::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Easing::$variant => stringify!($variant)),+
                }
            }

            pub fn family(self) -> EaseFamily {
                match self {
                    $(Easing::$variant => EaseFamily::$family),+
                }
            }

            /// `Linear` reports `In`; its four directions coincide.
            pub fn direction(self) -> EaseDirection {
                match self {
                    $(Easing::$variant => EaseDirection::$dir),+
                }
            }
        }
    };
}

easing_catalog! {
    Linear => (Linear, In),
    SineIn => (Sine, In),
    SineOut => (Sine, Out),
    SineInOut => (Sine, InOut),
    SineOutIn => (Sine, OutIn),
    QuadIn => (Quad, In),
    QuadOut => (Quad, Out),
    QuadInOut => (Quad, InOut),
    QuadOutIn => (Quad, OutIn),
    CubicIn => (Cubic, In),
    CubicOut => (Cubic, Out),
    CubicInOut => (Cubic, InOut),
    CubicOutIn => (Cubic, OutIn),
    QuartIn => (Quart, In),
    QuartOut => (Quart, Out),
    QuartInOut => (Quart, InOut),
    QuartOutIn => (Quart, OutIn),
    QuintIn => (Quint, In),
    QuintOut => (Quint, Out),
    QuintInOut => (Quint, InOut),
    QuintOutIn => (Quint, OutIn),
    ExpoIn => (Expo, In),
    ExpoOut => (Expo, Out),
    ExpoInOut => (Expo, InOut),
    ExpoOutIn => (Expo, OutIn),
    CircIn => (Circ, In),
    CircOut => (Circ, Out),
    CircInOut => (Circ, InOut),
    CircOutIn => (Circ, OutIn),
    BounceIn => (Bounce, In),
    BounceOut => (Bounce, Out),
    BounceInOut => (Bounce, InOut),
    BounceOutIn => (Bounce, OutIn),
    BackIn => (Back, In),
    BackOut => (Back, Out),
    BackInOut => (Back, InOut),
    BackOutIn => (Back, OutIn),
    ElasticIn => (Elastic, In),
    ElasticOut => (Elastic, Out),
    ElasticInOut => (Elastic, InOut),
    ElasticOutIn => (Elastic, OutIn),
    WarpIn => (Warp, In),
    WarpOut => (Warp, Out),
    WarpInOut => (Warp, InOut),
    WarpOutIn => (Warp, OutIn),
}

impl EaseFamily {
    /// The family's `(In, Out)` pair. Warp is absent: its split variants are not
    /// compositions of the single-direction steps.
    fn pair(self) -> Option<(fn(f32) -> f32, fn(f32) -> f32)> {
        let pair: (fn(f32) -> f32, fn(f32) -> f32) = match self {
            EaseFamily::Linear => (f::linear, f::linear),
            EaseFamily::Sine => (f::sine_in, f::sine_out),
            EaseFamily::Quad => (f::quad_in, f::quad_out),
            EaseFamily::Cubic => (f::cubic_in, f::cubic_out),
            EaseFamily::Quart => (f::quart_in, f::quart_out),
            EaseFamily::Quint => (f::quint_in, f::quint_out),
            EaseFamily::Expo => (f::expo_in, f::expo_out),
            EaseFamily::Circ => (f::circ_in, f::circ_out),
            EaseFamily::Bounce => (f::bounce_in, f::bounce_out),
            EaseFamily::Back => (f::back_in, f::back_out),
            EaseFamily::Elastic => (f::elastic_in, f::elastic_out),
            EaseFamily::Warp => return None,
        };
        Some(pair)
    }
}

impl Easing {
    /// Build an identifier from its parts. `Linear` ignores the direction.
    pub fn from_parts(family: EaseFamily, direction: EaseDirection) -> Easing {
        if family == EaseFamily::Linear {
            return Easing::Linear;
        }
        Easing::ALL
            .iter()
            .copied()
            .find(|e| e.family() == family && e.direction() == direction)
            .unwrap_or(Easing::Linear)
    }

    /// Remap normalized time to normalized progress.
    pub fn evaluate(self, t: f32) -> f32 {
        let family = self.family();
        let direction = self.direction();
        match (family, direction) {
            (EaseFamily::Circ, EaseDirection::InOut) => return f::circ_in_out(t),
            (EaseFamily::Circ, EaseDirection::OutIn) => return f::circ_out_in(t),
            _ => {}
        }
        match family.pair() {
            Some((ease_in, ease_out)) => match direction {
                EaseDirection::In => ease_in(t),
                EaseDirection::Out => ease_out(t),
                EaseDirection::InOut => f::in_out(ease_in, ease_out, t),
                EaseDirection::OutIn => f::out_in(ease_in, ease_out, t),
            },
            None => match direction {
                EaseDirection::In => f::warp_in(t),
                EaseDirection::Out => f::warp_out(t),
                EaseDirection::InOut => f::warp_in_out(t),
                EaseDirection::OutIn => f::warp_out_in(t),
            },
        }
    }
}

/// Free-function form of [`Easing::evaluate`].
#[inline]
pub fn evaluate(easing: Easing, t: f32) -> f32 {
    easing.evaluate(t)
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = TweenError;

    /// Accepts catalog names case-insensitively, with or without `_`/`-` separators
    /// (`"ExpoOut"`, `"expo_out"`, `"expo-out"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Easing::ALL
            .iter()
            .copied()
            .find(|e| e.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| TweenError::UnknownCurve { name: s.to_string() })
    }
}

impl TryFrom<u8> for Easing {
    type Error = TweenError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Easing::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| TweenError::UnknownCurve {
                name: code.to_string(),
            })
    }
}
