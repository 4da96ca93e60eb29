//! Animatable scalar properties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// One scalar channel of an animated entity.
///
/// Position and scale are local-space components. `Rotation` is the z-axis angle in
/// degrees. `Opacity` is indirect: it is written to every renderable found under the
/// entity rather than to the entity itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Property {
    #[serde(alias = "alpha", alias = "Alpha")]
    Opacity,
    #[serde(alias = "x", alias = "X")]
    PositionX,
    #[serde(alias = "y", alias = "Y")]
    PositionY,
    #[serde(alias = "rotation")]
    Rotation,
    #[serde(alias = "scale_x")]
    ScaleX,
    #[serde(alias = "scale_y")]
    ScaleY,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::Opacity,
        Property::PositionX,
        Property::PositionY,
        Property::Rotation,
        Property::ScaleX,
        Property::ScaleY,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Property::Opacity => "Opacity",
            Property::PositionX => "PositionX",
            Property::PositionY => "PositionY",
            Property::Rotation => "Rotation",
            Property::ScaleX => "ScaleX",
            Property::ScaleY => "ScaleY",
        }
    }

    /// Indirect properties are written to resolved render targets, not the owner.
    #[inline]
    pub fn is_indirect(self) -> bool {
        matches!(self, Property::Opacity)
    }

    /// Only positional writes honor the owner's snap setting.
    #[inline]
    pub fn snaps(self) -> bool {
        matches!(self, Property::PositionX | Property::PositionY)
    }
}

/// Truncate toward zero when `snap` is set.
#[inline]
pub fn snap_value(value: f32, snap: bool) -> f32 {
    if snap {
        value.trunc()
    } else {
        value
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let found = match wanted.as_str() {
            "alpha" => Some(Property::Opacity),
            "x" => Some(Property::PositionX),
            "y" => Some(Property::PositionY),
            other => Property::ALL
                .iter()
                .copied()
                .find(|p| p.name().to_ascii_lowercase() == other),
        };
        found.ok_or_else(|| TweenError::UnknownProperty { name: s.to_string() })
    }
}

impl TryFrom<u8> for Property {
    type Error = TweenError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Property::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| TweenError::UnknownProperty {
                name: code.to_string(),
            })
    }
}
