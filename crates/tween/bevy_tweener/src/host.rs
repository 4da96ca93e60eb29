use bevy::color::Alpha;
use bevy::log::debug;
use bevy::prelude::*;
use tweener_core::{snap_value, HierarchyWalker, Property, PropertyAccess};

/// A renderable whose color alpha carries the owner's opacity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    Sprite(Entity),
    /// Every section of the text is written.
    Text(Entity),
}

/// Property access for one entity of a `World`.
pub struct WorldHost<'w> {
    world: &'w mut World,
    entity: Entity,
}

impl<'w> WorldHost<'w> {
    pub fn new(world: &'w mut World, entity: Entity) -> Self {
        Self { world, entity }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    fn sprite_alpha(&self, entity: Entity) -> Option<f32> {
        self.world.get::<Sprite>(entity).map(|s| s.color.alpha())
    }
}

/// Z-axis Euler angle in degrees.
fn z_degrees(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::XYZ).2.to_degrees()
}

fn with_z_degrees(rotation: Quat, degrees: f32) -> Quat {
    let (x, y, _) = rotation.to_euler(EulerRot::XYZ);
    Quat::from_euler(EulerRot::XYZ, x, y, degrees.to_radians())
}

impl PropertyAccess for WorldHost<'_> {
    type Target = RenderTarget;

    fn read(&self, property: Property) -> f32 {
        if property == Property::Opacity {
            return self.sprite_alpha(self.entity).unwrap_or(1.0);
        }
        let Some(tf) = self.world.get::<Transform>(self.entity) else {
            return 0.0;
        };
        match property {
            Property::PositionX => tf.translation.x,
            Property::PositionY => tf.translation.y,
            Property::Rotation => z_degrees(tf.rotation),
            Property::ScaleX => tf.scale.x,
            Property::ScaleY => tf.scale.y,
            Property::Opacity => 1.0,
        }
    }

    fn write(&mut self, property: Property, value: f32, snap: bool) {
        let value = snap_value(value, snap);
        if property == Property::Opacity {
            if let Some(mut sprite) = self.world.get_mut::<Sprite>(self.entity) {
                sprite.color.set_alpha(value);
            }
            return;
        }
        let Some(mut tf) = self.world.get_mut::<Transform>(self.entity) else {
            debug!("{:?} has no Transform; {property} write skipped", self.entity);
            return;
        };
        match property {
            Property::PositionX => tf.translation.x = value,
            Property::PositionY => tf.translation.y = value,
            Property::Rotation => tf.rotation = with_z_degrees(tf.rotation, value),
            Property::ScaleX => tf.scale.x = value,
            Property::ScaleY => tf.scale.y = value,
            Property::Opacity => {}
        }
    }

    fn read_target(&self, target: &RenderTarget, _property: Property) -> f32 {
        let alpha = match *target {
            RenderTarget::Sprite(e) => self.sprite_alpha(e),
            RenderTarget::Text(e) => self
                .world
                .get::<Text>(e)
                .and_then(|t| t.sections.first())
                .map(|s| s.style.color.alpha()),
        };
        alpha.unwrap_or(1.0)
    }

    fn write_target(&mut self, target: &RenderTarget, _property: Property, value: f32) {
        match *target {
            RenderTarget::Sprite(e) => {
                if let Some(mut sprite) = self.world.get_mut::<Sprite>(e) {
                    sprite.color.set_alpha(value);
                }
            }
            RenderTarget::Text(e) => {
                if let Some(mut text) = self.world.get_mut::<Text>(e) {
                    for section in text.sections.iter_mut() {
                        section.style.color.set_alpha(value);
                    }
                }
            }
        }
    }
}

impl HierarchyWalker for WorldHost<'_> {
    type Node = Entity;

    fn root(&self) -> Entity {
        self.entity
    }

    fn children(&self, node: &Entity) -> Vec<Entity> {
        self.world
            .get::<Children>(*node)
            .map(|c| c.iter().copied().collect())
            .unwrap_or_default()
    }

    fn render_targets(&self, node: &Entity, out: &mut Vec<RenderTarget>) {
        if self.world.get::<Sprite>(*node).is_some() {
            out.push(RenderTarget::Sprite(*node));
        }
        if self.world.get::<Text>(*node).is_some() {
            out.push(RenderTarget::Text(*node));
        }
    }
}
