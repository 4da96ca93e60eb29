//! Batched requests applied at the start of [`TweenOwner::update`](crate::TweenOwner::update).

use serde::{Deserialize, Serialize};

use crate::config::TweenCfg;
use crate::property::Property;

/// One tween request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TweenCommand {
    Start {
        property: Property,
        to: f32,
        cfg: TweenCfg,
    },
    Cancel {
        property: Property,
        #[serde(default)]
        complete: bool,
    },
}

/// Commands for one tick, applied in order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(default)]
    pub commands: Vec<TweenCommand>,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, property: Property, to: f32, cfg: TweenCfg) -> Self {
        self.commands.push(TweenCommand::Start { property, to, cfg });
        self
    }

    pub fn cancel(mut self, property: Property, complete: bool) -> Self {
        self.commands.push(TweenCommand::Cancel { property, complete });
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
