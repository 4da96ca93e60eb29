use bevy::log::{debug, warn};
use bevy::prelude::*;
use tweener_core::{Inputs, TweenEvent};

use crate::components::Tweener;
use crate::host::WorldHost;
use crate::TweenLifecycle;

/// Exclusive per-frame driver for every `Tweener`.
///
/// For each entity: resolve opacity targets the first time it is seen, apply queued
/// requests in order, then advance by the frame delta. Events raised this frame are
/// re-emitted as [`TweenLifecycle`].
pub fn drive_tweeners_system(world: &mut World) {
    let Some(dt) = world.get_resource::<Time>().map(|t| t.delta_seconds()) else {
        return;
    };

    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<Tweener>>()
        .iter(world)
        .collect();

    let mut lifecycle: Vec<TweenLifecycle> = Vec::new();
    for entity in entities {
        // Move the scheduler out so the host can borrow the world mutably.
        let Some(mut tweener) = world
            .get_mut::<Tweener>(entity)
            .map(|mut t| std::mem::take(&mut *t))
        else {
            continue;
        };

        let events = step_entity(world, entity, &mut tweener, dt);
        lifecycle.extend(events.into_iter().map(|event| TweenLifecycle { entity, event }));

        if let Some(mut slot) = world.get_mut::<Tweener>(entity) {
            *slot = tweener;
        }
    }

    for event in lifecycle {
        world.send_event(event);
    }
}

fn step_entity(world: &mut World, entity: Entity, tweener: &mut Tweener, dt: f32) -> Vec<TweenEvent> {
    let commands = tweener.take_queue();
    let owner = tweener.owner_mut();
    let mut host = WorldHost::new(world, entity);

    if !owner.has_started() {
        owner.resolve_property_sources(&mut host);
        debug!(
            "{entity:?}: {} render target(s) resolved",
            owner.render_targets().len()
        );
    }

    let events = owner
        .update(&mut host, dt, Inputs { commands })
        .events
        .clone();
    for event in &events {
        if let TweenEvent::Rejected { property, error } = event {
            warn!("{entity:?}: {property} tween rejected: {error}");
        }
    }
    events
}
