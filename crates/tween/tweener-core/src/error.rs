//! Error types for tweener-core

use serde::{Deserialize, Serialize};

/// Errors surfaced by the tween engine.
///
/// `UnknownCurve` and `UnknownProperty` indicate a mismatch between a request and the
/// supported catalogs. They are programming errors and are never retried.
/// Requesting a tween on a property with no resolved write target is not an error;
/// the scheduler treats it as a no-op.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// Easing identifier outside the catalog
    #[error("Unknown easing curve: {name}")]
    UnknownCurve { name: String },

    /// Property identifier outside the catalog
    #[error("Unknown tween property: {name}")]
    UnknownProperty { name: String },

    /// Tween durations must be strictly positive
    #[error("Invalid tween duration: {duration} (must be > 0)")]
    InvalidDuration { duration: f32 },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

impl TweenError {
    /// Whether this error indicates a code-level catalog mismatch.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnknownCurve { .. } | Self::UnknownProperty { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownCurve { .. } | Self::UnknownProperty { .. } => "catalog",
            Self::InvalidDuration { .. } => "request",
            Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_are_fatal() {
        let e = TweenError::UnknownCurve {
            name: "Wobble".into(),
        };
        assert!(e.is_fatal());
        assert_eq!(e.category(), "catalog");
        assert_eq!(e.to_string(), "Unknown easing curve: Wobble");

        let d = TweenError::InvalidDuration { duration: 0.0 };
        assert!(!d.is_fatal());
        assert_eq!(d.category(), "request");
    }
}
