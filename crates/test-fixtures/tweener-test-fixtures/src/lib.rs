//! Shared JSON fixtures for the tween crates.
//!
//! `fixtures/manifest.json` maps short names to files under `fixtures/`, grouped
//! into curve tables and scripted sessions.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static INDEX: Lazy<Index> = Lazy::new(Index::embedded);

#[derive(Clone, Copy, Debug)]
enum Kind {
    Curve,
    Script,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Curve => "curve table",
            Kind::Script => "script",
        }
    }
}

/// Name to relative-path tables, sorted by name.
#[derive(Debug, Default, Deserialize)]
struct Index {
    curves: BTreeMap<String, String>,
    scripts: BTreeMap<String, String>,
}

impl Index {
    /// Both groups are empty if the embedded manifest is malformed.
    fn embedded() -> Self {
        serde_json::from_str(include_str!("../../../../fixtures/manifest.json")).unwrap_or_default()
    }

    fn group(&self, kind: Kind) -> &BTreeMap<String, String> {
        match kind {
            Kind::Curve => &self.curves,
            Kind::Script => &self.scripts,
        }
    }

    fn names(&self, kind: Kind) -> Vec<String> {
        self.group(kind).keys().cloned().collect()
    }

    fn locate(&self, kind: Kind, name: &str) -> Result<PathBuf> {
        let rel = self
            .group(kind)
            .get(name)
            .ok_or_else(|| anyhow!("no {} named '{name}' in the manifest", kind.label()))?;
        Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    fn text(&self, kind: Kind, name: &str) -> Result<String> {
        let path = self.locate(kind, name)?;
        fs::read_to_string(&path)
            .with_context(|| format!("reading {} '{name}' from {}", kind.label(), path.display()))
    }

    fn parse<T: DeserializeOwned>(&self, kind: Kind, name: &str) -> Result<T> {
        let text = self.text(kind, name)?;
        serde_json::from_str(&text)
            .with_context(|| format!("decoding {} '{name}'", kind.label()))
    }
}

/// Reference curve samples: `{ tolerance, samples: [{ easing, t, value }] }`.
pub mod curves {
    use super::{Kind, Result, INDEX};
    use serde::de::DeserializeOwned;
    use std::path::PathBuf;

    pub fn keys() -> Vec<String> {
        INDEX.names(Kind::Curve)
    }

    pub fn json(name: &str) -> Result<String> {
        INDEX.text(Kind::Curve, name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        INDEX.parse(Kind::Curve, name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        INDEX.locate(Kind::Curve, name)
    }
}

/// Scripted tween sessions: a sequence of start/advance/cancel steps with expectations.
pub mod scripts {
    use super::{Kind, Result, INDEX};
    use serde::de::DeserializeOwned;
    use std::path::PathBuf;

    /// Sorted by name.
    pub fn keys() -> Vec<String> {
        INDEX.names(Kind::Script)
    }

    pub fn json(name: &str) -> Result<String> {
        INDEX.text(Kind::Script, name)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        INDEX.parse(Kind::Script, name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        INDEX.locate(Kind::Script, name)
    }
}
