use bevy::prelude::*;
use tweener_core::{Config, Property, TweenCfg, TweenCommand, TweenOwner};

use crate::host::RenderTarget;

/// Per-entity tween scheduler plus the requests queued for the next frame.
///
/// Request methods only enqueue; `drive_tweeners_system` applies them in order
/// before advancing.
#[derive(Component, Debug, Default)]
pub struct Tweener {
    owner: TweenOwner<RenderTarget>,
    queue: Vec<TweenCommand>,
}

impl Tweener {
    pub fn new(cfg: Config) -> Self {
        Self {
            owner: TweenOwner::new(cfg),
            queue: Vec::new(),
        }
    }

    pub fn owner(&self) -> &TweenOwner<RenderTarget> {
        &self.owner
    }

    pub fn owner_mut(&mut self) -> &mut TweenOwner<RenderTarget> {
        &mut self.owner
    }

    /// Queue a request with explicit settings.
    pub fn tween(&mut self, property: Property, to: f32, cfg: TweenCfg) -> &mut Self {
        self.queue.push(TweenCommand::Start { property, to, cfg });
        self
    }

    /// Queue a request with this entity's defaults for `property`.
    pub fn to(&mut self, property: Property, to: f32) -> &mut Self {
        let cfg = self.owner.tween_cfg(property);
        self.tween(property, to, cfg)
    }

    pub fn x(&mut self, to: f32) -> &mut Self {
        self.to(Property::PositionX, to)
    }

    pub fn y(&mut self, to: f32) -> &mut Self {
        self.to(Property::PositionY, to)
    }

    /// Z-axis angle in degrees.
    pub fn rotation(&mut self, to: f32) -> &mut Self {
        self.to(Property::Rotation, to)
    }

    pub fn scale_x(&mut self, to: f32) -> &mut Self {
        self.to(Property::ScaleX, to)
    }

    pub fn scale_y(&mut self, to: f32) -> &mut Self {
        self.to(Property::ScaleY, to)
    }

    pub fn alpha(&mut self, to: f32) -> &mut Self {
        self.to(Property::Opacity, to)
    }

    pub fn cancel(&mut self, property: Property, complete: bool) -> &mut Self {
        self.queue.push(TweenCommand::Cancel { property, complete });
        self
    }

    pub fn is_animating(&self, property: Property) -> bool {
        self.owner.is_animating(property)
    }

    /// Requests not yet applied.
    pub fn pending(&self) -> &[TweenCommand] {
        &self.queue
    }

    /// Discard running tweens and queued requests without writing final values.
    pub fn teardown(&mut self) {
        self.queue.clear();
        self.owner.teardown();
    }

    pub(crate) fn take_queue(&mut self) -> Vec<TweenCommand> {
        std::mem::take(&mut self.queue)
    }
}
