//! TweenOwner: the per-entity scheduler.
//!
//! Holds at most one [`Tween`] per [`Property`], advances them once per tick and writes
//! the results through a [`PropertyAccess`] host.
//!
//! Indirect properties (opacity) need their render targets discovered first. Until
//! [`TweenOwner::resolve_property_sources`] runs, opacity requests are buffered and
//! opacity writes are cached; resolution flushes both.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::config::{Config, TweenCfg};
use crate::error::TweenError;
use crate::host::{collect_render_targets, HierarchyWalker, PropertyAccess};
use crate::ids::{IdAllocator, TweenId};
use crate::inputs::{Inputs, TweenCommand};
use crate::outputs::{Change, Outputs, TweenEvent};
use crate::property::Property;
use crate::tween::Tween;

/// An indirect request made before render targets were known.
#[derive(Debug, Clone, Copy)]
struct Buffered {
    property: Property,
    /// Start came from `Config::default_opacity`, not from a cached write.
    assumed_start: bool,
}

/// Where indirect property writes go.
#[derive(Debug, Clone)]
enum Sources<T> {
    /// Render targets not discovered yet.
    Unresolved {
        /// Indirect requests to reconcile with the real targets on resolution.
        pending: Vec<Buffered>,
        /// Last opacity written while unresolved.
        cached_opacity: Option<f32>,
    },
    Resolved { targets: Vec<T> },
}

impl<T> Default for Sources<T> {
    fn default() -> Self {
        Sources::Unresolved {
            pending: Vec::new(),
            cached_opacity: None,
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum Removal {
    Overwrite,
    Cancel,
}

/// Route a write to the owner or, for indirect properties, to every render target.
fn write_property<H: PropertyAccess>(
    host: &mut H,
    sources: &mut Sources<H::Target>,
    property: Property,
    value: f32,
    snap: bool,
) {
    if !property.is_indirect() {
        host.write(property, value, snap && property.snaps());
        return;
    }
    match sources {
        Sources::Unresolved { cached_opacity, .. } => *cached_opacity = Some(value),
        Sources::Resolved { targets } => {
            for target in targets.iter() {
                host.write_target(target, property, value);
            }
        }
    }
}

/// Scheduler for one animated entity. `T` is the host's render-target handle.
#[derive(Debug)]
pub struct TweenOwner<T> {
    cfg: Config,
    ids: IdAllocator,
    // Insertion-ordered; keyed by property so each property has at most one tween.
    tweens: IndexMap<Property, Tween>,
    sources: Sources<T>,
    // Events raised by start/cancel between ticks, published by the next advance.
    staged_events: Vec<TweenEvent>,
    outputs: Outputs,
}

impl<T> Default for TweenOwner<T> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<T> TweenOwner<T> {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            tweens: IndexMap::new(),
            sources: Sources::default(),
            staged_events: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.cfg
    }

    /// Whether render targets have been resolved.
    #[inline]
    pub fn has_started(&self) -> bool {
        matches!(self.sources, Sources::Resolved { .. })
    }

    /// Resolved render targets; empty before resolution.
    pub fn render_targets(&self) -> &[T] {
        match &self.sources {
            Sources::Resolved { targets } => targets,
            Sources::Unresolved { .. } => &[],
        }
    }

    pub fn get(&self, property: Property) -> Option<&Tween> {
        self.tweens.get(&property)
    }

    /// Active tweens in start order.
    pub fn tweens(&self) -> impl Iterator<Item = &Tween> {
        self.tweens.values()
    }

    #[inline]
    pub fn is_animating(&self, property: Property) -> bool {
        self.tweens.contains_key(&property)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Outputs of the last advance.
    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Request settings for `property` from this owner's defaults.
    pub fn tween_cfg(&self, property: Property) -> TweenCfg {
        self.cfg.tween_cfg(property)
    }

    /// Start animating `property` towards `to`.
    ///
    /// A tween already running on `property` is removed first; with
    /// `cfg.complete_on_overwrite` its end value is written before the new start value
    /// is read. Returns `Ok(None)` when `property` has no write target on this entity.
    pub fn start_tween<H>(
        &mut self,
        host: &mut H,
        property: Property,
        to: f32,
        cfg: TweenCfg,
    ) -> Result<Option<TweenId>, TweenError>
    where
        H: PropertyAccess<Target = T>,
    {
        if cfg.duration.is_nan() || cfg.duration <= 0.0 {
            return Err(TweenError::InvalidDuration {
                duration: cfg.duration,
            });
        }
        if property.is_indirect() {
            if let Sources::Resolved { targets } = &self.sources {
                if targets.is_empty() {
                    debug!("{property} tween ignored: no render targets");
                    return Ok(None);
                }
            }
        }

        self.remove_existing(host, property, cfg.complete_on_overwrite, Removal::Overwrite);

        let from = self.current_value(host, property);
        let id = self.ids.alloc();
        self.tweens.insert(
            property,
            Tween::new(id, property, from, to, cfg.duration, cfg.easing),
        );
        if property.is_indirect() {
            if let Sources::Unresolved {
                pending,
                cached_opacity,
            } = &mut self.sources
            {
                let assumed_start = cached_opacity.is_none();
                match pending.iter_mut().find(|b| b.property == property) {
                    Some(buffered) => buffered.assumed_start = assumed_start,
                    None => pending.push(Buffered {
                        property,
                        assumed_start,
                    }),
                }
            }
        }
        trace!(
            "tween {:?} started: {property} {from} -> {to} over {}s ({})",
            id,
            cfg.duration,
            cfg.easing
        );
        self.staged_events.push(TweenEvent::Started {
            tween: id,
            property,
            from,
            to,
        });
        Ok(Some(id))
    }

    /// Stop the tween on `property`, optionally writing its end value first.
    pub fn cancel<H>(&mut self, host: &mut H, property: Property, complete: bool) -> Option<Tween>
    where
        H: PropertyAccess<Target = T>,
    {
        self.remove_existing(host, property, complete, Removal::Cancel)
    }

    fn remove_existing<H>(
        &mut self,
        host: &mut H,
        property: Property,
        complete: bool,
        reason: Removal,
    ) -> Option<Tween>
    where
        H: PropertyAccess<Target = T>,
    {
        let tween = self.tweens.shift_remove(&property)?;
        if complete {
            write_property(host, &mut self.sources, property, tween.end, self.cfg.snap);
        }
        debug!(
            "tween {:?} on {property} removed ({reason:?}, completed: {complete})",
            tween.id
        );
        let event = match reason {
            Removal::Overwrite => TweenEvent::Overwritten {
                tween: tween.id,
                property,
                completed: complete,
            },
            Removal::Cancel => TweenEvent::Cancelled {
                tween: tween.id,
                property,
                completed: complete,
            },
        };
        self.staged_events.push(event);
        Some(tween)
    }

    fn current_value<H>(&self, host: &H, property: Property) -> f32
    where
        H: PropertyAccess<Target = T>,
    {
        if !property.is_indirect() {
            return host.read(property);
        }
        match &self.sources {
            Sources::Unresolved { cached_opacity, .. } => {
                cached_opacity.unwrap_or(self.cfg.default_opacity)
            }
            Sources::Resolved { targets } => targets
                .first()
                .map(|t| host.read_target(t, property))
                .unwrap_or(self.cfg.default_opacity),
        }
    }

    /// Advance every tween by `dt` seconds and write the results.
    ///
    /// Finished tweens still write their exact end value this tick; they are removed
    /// only after every tween has been written.
    pub fn advance<H>(&mut self, host: &mut H, dt: f32) -> &Outputs
    where
        H: PropertyAccess<Target = T>,
    {
        self.outputs.clear();
        self.outputs.events.append(&mut self.staged_events);

        if !self.has_started() && !self.tweens.is_empty() {
            trace!("advancing before render targets were resolved; opacity writes are cached");
        }

        let snap = self.cfg.snap;
        let mut finished = 0usize;
        for tween in self.tweens.values_mut() {
            let value = tween.step(dt);
            write_property(host, &mut self.sources, tween.property, value, snap);
            self.outputs.push_change(Change {
                tween: tween.id,
                property: tween.property,
                value,
            });
            if tween.finished {
                finished += 1;
            }
        }

        if finished > 0 {
            let outputs = &mut self.outputs;
            self.tweens.retain(|property, tween| {
                if tween.finished {
                    outputs.push_event(TweenEvent::Completed {
                        tween: tween.id,
                        property: *property,
                    });
                    false
                } else {
                    true
                }
            });
            trace!("{finished} tween(s) completed, {} active", self.tweens.len());
        }

        &self.outputs
    }

    /// Apply `inputs` in order, then advance by `dt`.
    ///
    /// A command that fails is skipped and reported as [`TweenEvent::Rejected`] in the
    /// returned outputs; the remaining commands still apply and the tick still advances.
    pub fn update<H>(&mut self, host: &mut H, dt: f32, inputs: Inputs) -> &Outputs
    where
        H: PropertyAccess<Target = T>,
    {
        for command in inputs.commands {
            match command {
                TweenCommand::Start { property, to, cfg } => {
                    if let Err(error) = self.start_tween(host, property, to, cfg) {
                        debug!("{property} tween rejected: {error}");
                        self.staged_events
                            .push(TweenEvent::Rejected { property, error });
                    }
                }
                TweenCommand::Cancel { property, complete } => {
                    self.cancel(host, property, complete);
                }
            }
        }
        self.advance(host, dt)
    }

    /// One-time discovery of render targets for indirect properties.
    ///
    /// Cached opacity is flushed to every target. A buffered request whose start was
    /// assumed takes the first target's value from before the flush as its start;
    /// if it already advanced it keeps its elapsed time and is re-sampled onto every
    /// target. Without targets, buffered requests are dropped. Later calls are no-ops.
    pub fn resolve_property_sources<H>(&mut self, host: &mut H)
    where
        H: HierarchyWalker<Target = T>,
    {
        let (pending, cached_opacity) = match &mut self.sources {
            Sources::Resolved { .. } => {
                debug!("render targets already resolved");
                return;
            }
            Sources::Unresolved {
                pending,
                cached_opacity,
            } => (std::mem::take(pending), cached_opacity.take()),
        };

        let targets = collect_render_targets(&*host);
        debug!(
            "resolved {} render target(s), {} buffered request(s)",
            targets.len(),
            pending.len()
        );

        // Target values as they were before anything cached lands on them.
        let untouched: Vec<Option<f32>> = pending
            .iter()
            .map(|b| targets.first().map(|t| host.read_target(t, b.property)))
            .collect();

        if let Some(value) = cached_opacity {
            for target in &targets {
                host.write_target(target, Property::Opacity, value);
            }
        }

        for (buffered, untouched) in pending.into_iter().zip(untouched) {
            let property = buffered.property;
            if targets.is_empty() {
                if let Some(tween) = self.tweens.shift_remove(&property) {
                    debug!("tween {:?} on {property} dropped: no render targets", tween.id);
                    self.staged_events.push(TweenEvent::Dropped {
                        tween: tween.id,
                        property,
                    });
                }
                continue;
            }
            let (Some(tween), Some(real_start)) = (self.tweens.get_mut(&property), untouched)
            else {
                continue;
            };
            if !buffered.assumed_start {
                continue;
            }
            tween.start = real_start;
            if tween.elapsed > 0.0 {
                tween.value = tween.sample();
                debug!(
                    "tween {:?} on {property} re-based to {} at {}s",
                    tween.id, tween.start, tween.elapsed
                );
                for target in &targets {
                    host.write_target(target, property, tween.value);
                }
            } else {
                tween.value = tween.start;
            }
        }

        self.sources = Sources::Resolved { targets };
    }

    /// Drop every tween without writing final values and release render targets.
    /// Opacity requests made afterwards are no-ops.
    pub fn teardown(&mut self) {
        debug!("teardown: discarding {} tween(s)", self.tweens.len());
        self.tweens.clear();
        self.staged_events.clear();
        self.outputs.clear();
        self.sources = Sources::Resolved {
            targets: Vec::new(),
        };
    }
}
