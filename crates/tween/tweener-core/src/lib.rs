//! Tweener Core (engine-agnostic)
//!
//! Scalar property tweens driven by a closed catalog of easing curves.
//! [`TweenOwner`] keeps at most one [`Tween`] per [`Property`] of an entity, advances
//! them once per tick and writes results through a host implementing
//! [`PropertyAccess`] (and [`HierarchyWalker`] for opacity targets).

pub mod config;
pub mod ease;
pub mod error;
pub mod host;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod owner;
pub mod property;
pub mod tween;

// Re-exports for consumers (adapters)
pub use config::{Config, TweenCfg};
pub use ease::{evaluate, EaseDirection, EaseFamily, Easing};
pub use error::TweenError;
pub use host::{collect_render_targets, HierarchyWalker, PropertyAccess};
pub use ids::TweenId;
pub use inputs::{Inputs, TweenCommand};
pub use outputs::{Change, Outputs, TweenEvent};
pub use owner::TweenOwner;
pub use property::{snap_value, Property};
pub use tween::Tween;
