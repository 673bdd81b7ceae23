// potpie/src/commands/mod.rs
//! Command implementations for the potpie CLI.

pub mod preview;
pub mod translate;
pub mod validate;

use anyhow::{Context, Result};
use potpie_core::config::{load_default_config, PotpieConfig};
use std::path::Path;

/// Loads the configuration named on the command line, or the first one found
/// in the default locations.
pub fn load_config(path: Option<&Path>) -> Result<PotpieConfig> {
    match path {
        Some(p) => PotpieConfig::load_from_file(p)
            .with_context(|| format!("Failed to load configuration from {}", p.display())),
        None => load_default_config().context("Failed to load the default configuration"),
    }
}
