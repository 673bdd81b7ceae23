// potpie-core/src/catalog/mod.rs
//! Catalog adapters.
//!
//! A catalog is a sequence of messages, each with a source string and a target
//! string. The transform pipeline only reads sources and writes targets; the
//! adapters own everything else about the file (headers, comments, flags,
//! ordering) and write it back untouched.
//!
//! License: MIT OR APACHE 2.0

pub mod json;
pub mod po;

pub use json::JsonCatalog;
pub use po::{PoCatalog, PoHeader};

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{PotpieError, Result};

/// One source/target pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub source: String,
    #[serde(default)]
    pub target: String,
}

impl CatalogEntry {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The contract the pseudo-translation runner relies on.
pub trait Catalog {
    /// Number of messages. A plural message counts once, although it offers
    /// more than one source to [`Catalog::fill_targets`] and [`Catalog::entries`].
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A snapshot of every source/target pair, in file order.
    fn entries(&self) -> Vec<CatalogEntry>;

    /// Replaces every target with `fill(source)`.
    ///
    /// Stops at, and returns, the first error. Returns the number of targets written.
    fn fill_targets(&mut self, fill: &mut dyn FnMut(&str) -> Result<String>) -> Result<usize>;

    /// Persists the catalog to `path`, creating parent directories as needed.
    fn save(&self, path: &Path) -> Result<()>;
}

/// The on-disk catalog formats potpie understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Po,
    Json,
}

impl CatalogKind {
    /// Picks the catalog kind from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("po") | Some("pot") => Ok(CatalogKind::Po),
            Some("json") => Ok(CatalogKind::Json),
            _ => Err(PotpieError::UnsupportedCatalog(path.display().to_string())),
        }
    }
}

/// Loads the catalog at `path` with the adapter matching its extension.
pub fn open_catalog(path: &Path) -> Result<Box<dyn Catalog>> {
    let kind = CatalogKind::from_path(path)?;
    debug!("Opening {:?} catalog at {}", kind, path.display());
    Ok(match kind {
        CatalogKind::Po => Box::new(PoCatalog::load(path)?),
        CatalogKind::Json => Box::new(JsonCatalog::load(path)?),
    })
}

/// Creates the parent directory of `path` if it does not exist yet.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
