// potpie/src/logger.rs
//! Logging setup for the potpie CLI.
//!
//! `RUST_LOG` is honoured as usual. An explicit level from the command line
//! (`--quiet`, `--debug`) overrides it for the potpie crates only.
//! License: MIT OR Apache-2.0

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Module paths whose level follows the command-line override.
const POTPIE_MODULES: [&str; 2] = ["potpie", "potpie_core"];

/// Initializes the global logger.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        for module in POTPIE_MODULES {
            builder.filter_module(module, level);
        }
    }
    builder.format_timestamp(None);
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized.");
    }
}
