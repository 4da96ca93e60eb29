//! Bevy integration for `tweener-core`.

use bevy::prelude::*;
use tweener_core::TweenEvent;

pub mod components;
pub mod host;
pub mod systems;

pub use components::Tweener;
pub use host::{RenderTarget, WorldHost};
pub use systems::drive_tweeners_system;

/// A core lifecycle event tagged with the entity it happened on.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct TweenLifecycle {
    pub entity: Entity,
    pub event: TweenEvent,
}

pub struct TweenerPlugin;

impl Plugin for TweenerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TweenLifecycle>()
            .add_systems(Update, drive_tweeners_system);
    }
}
