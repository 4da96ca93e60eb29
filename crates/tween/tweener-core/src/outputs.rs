//! Output contracts from the scheduler.
//!
//! Outputs carry the values written during the last tick and the lifecycle events
//! raised since the previous tick.

use serde::{Deserialize, Serialize};

use crate::error::TweenError;
use crate::ids::TweenId;
use crate::property::Property;

/// One value written this tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub tween: TweenId,
    pub property: Property,
    pub value: f32,
}

/// Lifecycle signals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenEvent {
    Started {
        tween: TweenId,
        property: Property,
        from: f32,
        to: f32,
    },
    /// The tween reached its end value and was retired.
    Completed { tween: TweenId, property: Property },
    /// Replaced by a new request on the same property.
    Overwritten {
        tween: TweenId,
        property: Property,
        completed: bool,
    },
    Cancelled {
        tween: TweenId,
        property: Property,
        completed: bool,
    },
    /// Removed because the property has nothing to write to.
    Dropped { tween: TweenId, property: Property },
    /// A batched start request that failed validation; no tween was created.
    Rejected { property: Property, error: TweenError },
}

impl TweenEvent {
    pub fn property(&self) -> Property {
        match self {
            TweenEvent::Started { property, .. }
            | TweenEvent::Completed { property, .. }
            | TweenEvent::Overwritten { property, .. }
            | TweenEvent::Cancelled { property, .. }
            | TweenEvent::Dropped { property, .. }
            | TweenEvent::Rejected { property, .. } => *property,
        }
    }
}

/// Outputs returned by TweenOwner::advance().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<TweenEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: TweenEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Last value written for `property` this tick.
    pub fn value_of(&self, property: Property) -> Option<f32> {
        self.changes
            .iter()
            .rev()
            .find(|c| c.property == property)
            .map(|c| c.value)
    }
}
