//! Owner configuration and per-request settings.

use serde::{Deserialize, Serialize};

use crate::ease::Easing;
use crate::error::TweenError;
use crate::property::Property;

/// Configuration for a tween owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Truncate position writes toward zero.
    pub snap: bool,
    /// Duration used by [`Config::tween_cfg`], in seconds.
    pub default_duration: f32,
    pub default_easing: Easing,
    /// Opacity tweens default to a different curve than transform tweens.
    pub default_opacity_easing: Easing,
    /// Opacity assumed for render targets that have not been resolved yet.
    pub default_opacity: f32,
    pub complete_on_overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snap: false,
            default_duration: 0.25,
            default_easing: Easing::ExpoOut,
            default_opacity_easing: Easing::Linear,
            default_opacity: 1.0,
            complete_on_overwrite: true,
        }
    }
}

impl Config {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TweenError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default request settings for `property`.
    pub fn tween_cfg(&self, property: Property) -> TweenCfg {
        TweenCfg {
            duration: self.default_duration,
            easing: if property.is_indirect() {
                self.default_opacity_easing
            } else {
                self.default_easing
            },
            complete_on_overwrite: self.complete_on_overwrite,
        }
    }
}

/// Settings for one tween request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenCfg {
    /// Seconds; must be > 0.
    pub duration: f32,
    pub easing: Easing,
    /// Snap a tween already running on the same property to its end before replacing it.
    pub complete_on_overwrite: bool,
}

impl Default for TweenCfg {
    fn default() -> Self {
        Config::default().tween_cfg(Property::PositionX)
    }
}

impl TweenCfg {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            ..Self::default()
        }
    }

    pub fn with_complete_on_overwrite(mut self, complete: bool) -> Self {
        self.complete_on_overwrite = complete;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = Config::from_json_str(r#"{ "snap": true, "default_easing": "BackOut" }"#)
            .expect("parse config");
        assert!(cfg.snap);
        assert_eq!(cfg.default_easing, Easing::BackOut);
        assert_eq!(cfg.default_duration, 0.25);
        assert!(cfg.complete_on_overwrite);
    }

    #[test]
    fn bad_json_is_a_config_error() {
        let err = Config::from_json_str(r#"{ "default_easing": "Wobble" }"#).unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn opacity_uses_its_own_default_curve() {
        let cfg = Config::default();
        assert_eq!(cfg.tween_cfg(Property::Opacity).easing, Easing::Linear);
        assert_eq!(cfg.tween_cfg(Property::Rotation).easing, Easing::ExpoOut);
        let req = TweenCfg::new(1.0, Easing::BounceOut).with_complete_on_overwrite(false);
        assert!(!req.complete_on_overwrite);
        assert_eq!(req.duration, 1.0);
    }
}
