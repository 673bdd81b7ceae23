// potpie-core/src/catalog/json.rs
//! A minimal JSON catalog: an array of `{ "source": ..., "target": ... }` records.

use log::{debug, info};
use std::fs;
use std::path::Path;

use super::{ensure_parent_dir, Catalog, CatalogEntry};
use crate::errors::{PotpieError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonCatalog {
    entries: Vec<CatalogEntry>,
}

impl JsonCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(&text).map_err(|e| PotpieError::MalformedCatalog {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        info!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn as_slice(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Catalog for JsonCatalog {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> Vec<CatalogEntry> {
        self.entries.clone()
    }

    fn fill_targets(&mut self, fill: &mut dyn FnMut(&str) -> Result<String>) -> Result<usize> {
        for entry in self.entries.iter_mut() {
            entry.target = fill(&entry.source)?;
        }
        Ok(self.entries.len())
    }

    fn save(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        let mut text = serde_json::to_string_pretty(&self.entries)?;
        text.push('\n');
        fs::write(path, text)?;
        debug!("Wrote {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}
