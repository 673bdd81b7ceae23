//! Configuration management for `potpie-core`.
//!
//! A run can be configured from a YAML file: which transform to use, which
//! edge-preservation format applies, an optional seed for reproducible length
//! inflation, and whether (and with which plural counts) to validate printf
//! placeholders afterwards. Every field is optional; command-line flags take
//! precedence over the file.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dispatch::FormatContext;
use crate::errors::{PotpieError, Result};
use crate::transform::TransformKind;
use crate::validators::Language;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "potpie.yaml";

/// Run configuration as written in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PotpieConfig {
    /// Transform used when none is given on the command line.
    pub transform: TransformKind,
    /// Edge-preservation format; `None` means "derive from the catalog path".
    pub format: Option<String>,
    /// Seed for the random generator used by length inflation.
    pub seed: Option<u64>,
    /// Run the printf validator after translating.
    pub validate: bool,
    pub source_nplurals: usize,
    pub target_nplurals: usize,
}

impl Default for PotpieConfig {
    fn default() -> Self {
        Self {
            transform: TransformKind::default(),
            format: None,
            seed: None,
            validate: false,
            source_nplurals: 2,
            target_nplurals: 2,
        }
    }
}

impl PotpieConfig {
    /// Loads and validates a configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text).map_err(|e| match e {
            PotpieError::Config(msg) => {
                PotpieError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parses and validates a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: PotpieConfig =
            serde_yml::from_str(text).map_err(|e| PotpieError::Config(e.to_string()))?;
        config.validate()?;
        debug!("Parsed configuration: {:?}", config);
        Ok(config)
    }

    /// Rejects values no run could use.
    pub fn validate(&self) -> Result<()> {
        if self.source_nplurals == 0 || self.target_nplurals == 0 {
            return Err(PotpieError::Config(
                "'source_nplurals' and 'target_nplurals' must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured format, or the natural one for `catalog_path`.
    pub fn format_for(&self, catalog_path: &Path) -> FormatContext {
        match &self.format {
            Some(name) => FormatContext::from_name(name),
            None => FormatContext::for_path(catalog_path),
        }
    }

    pub fn source_language(&self) -> Language {
        Language::new("source", self.source_nplurals)
    }

    pub fn target_language(&self) -> Language {
        Language::new("target", self.target_nplurals)
    }
}

/// Places a configuration file is looked for, most specific first.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        Some(PathBuf::from(LOCAL_CONFIG_FILE)),
        dirs::home_dir().map(|p| p.join(".potpie").join("config.yaml")),
        dirs::config_dir().map(|p| p.join("potpie").join("config.yaml")),
    ];
    candidates.into_iter().flatten().collect()
}

/// Loads the first configuration file found among [`config_candidate_paths`].
///
/// Returns the default configuration when none exists.
pub fn load_default_config() -> Result<PotpieConfig> {
    match config_candidate_paths().into_iter().find(|p| p.is_file()) {
        Some(path) => PotpieConfig::load_from_file(path),
        None => {
            debug!("No configuration file found; using defaults.");
            Ok(PotpieConfig::default())
        }
    }
}
