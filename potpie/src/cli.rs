// potpie/src/cli.rs
//! This file defines the command-line interface (CLI) for the potpie application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use potpie_core::TransformKind;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "potpie",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pseudo-translate localization catalogs",
    long_about = "potpie rewrites every message of a localization catalog into a pseudo-translation: bracketed, accented, vowel-extended or padded text that keeps printf placeholders, markup and escape sequences intact. Running an application against the result shows untranslated strings, truncated layouts and encoding problems long before real translations arrive.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the potpie crates)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `potpie` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pseudo-translates a catalog file into a new catalog file.
    #[command(about = "Pseudo-translate a PO/POT or JSON catalog into a new file.")]
    Translate(TranslateCommand),

    /// Pseudo-translates text given on the command line or on stdin.
    #[command(about = "Pseudo-translate text from the command line or stdin and print it.")]
    Preview(PreviewCommand),

    /// Checks that every translation keeps the printf placeholders of its source.
    #[command(about = "Check printf placeholders in an already translated catalog.")]
    Validate(ValidateCommand),
}

/// Arguments for the `translate` command.
#[derive(Parser, Debug)]
pub struct TranslateCommand {
    /// Catalog to read.
    #[arg(value_name = "INPUT", help = "Catalog to read (.po, .pot or .json).")]
    pub input: PathBuf,

    /// Catalog to write; parent directories are created.
    #[arg(value_name = "OUTPUT", help = "Catalog to write. Missing parent directories are created.")]
    pub output: PathBuf,

    /// Transform to apply.
    #[arg(long = "type", short = 't', value_enum, value_name = "TRANSFORM", help = "Transform to apply (defaults to the configured one, or 'mixed').")]
    pub transform: Option<TransformChoice>,

    /// Edge-preservation format.
    #[arg(long, value_name = "FORMAT", help = "Format whose leading/trailing characters are preserved: 'po', 'properties' or anything else for none. Defaults to the input's extension.")]
    pub format: Option<String>,

    /// Seed for reproducible length inflation.
    #[arg(long, value_name = "N", help = "Seed the generator used by the 'extend' and 'mixed' transforms.")]
    pub seed: Option<u64>,

    /// Run the printf validator after translating.
    #[arg(long, help = "Check printf placeholders after translating and report mismatches.")]
    pub validate: bool,

    /// Path to a configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "POTPIE_CONFIG", help = "Path to a potpie configuration file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `preview` command.
#[derive(Parser, Debug)]
pub struct PreviewCommand {
    /// Text to pseudo-translate (reads from stdin if not provided).
    #[arg(value_name = "TEXT", help = "Text to pseudo-translate. Reads stdin line by line if omitted.")]
    pub text: Option<String>,

    /// Transform to apply.
    #[arg(long = "type", short = 't', value_enum, default_value = "mixed", value_name = "TRANSFORM")]
    pub transform: TransformChoice,

    /// Edge-preservation format.
    #[arg(long, value_name = "FORMAT", help = "Format whose leading/trailing characters are preserved ('po' or 'properties').")]
    pub format: Option<String>,

    /// Seed for reproducible length inflation.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Catalog to check.
    #[arg(value_name = "FILE", help = "Translated catalog to check (.po, .pot or .json).")]
    pub file: PathBuf,

    /// Plural forms of the source language.
    #[arg(long = "source-nplurals", value_name = "N", default_value_t = 2)]
    pub source_nplurals: usize,

    /// Plural forms of the target language.
    #[arg(long = "target-nplurals", value_name = "N", default_value_t = 2)]
    pub target_nplurals: usize,
}

/// Enum for selecting the pseudo-translation transform.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TransformChoice {
    /// Wrap each message in square brackets.
    Brackets,
    /// Replace ASCII letters with accented look-alikes.
    Unicode,
    /// Accent and repeat every vowel run ("hello" -> "héקéllôקô").
    #[value(name = "planguage")]
    PLanguage,
    /// Pad each message with special characters.
    Extend,
    /// Extend, then unicode, then brackets.
    Mixed,
}

impl From<TransformChoice> for TransformKind {
    fn from(choice: TransformChoice) -> Self {
        match choice {
            TransformChoice::Brackets => TransformKind::Brackets,
            TransformChoice::Unicode => TransformKind::Unicode,
            TransformChoice::PLanguage => TransformKind::PLanguage,
            TransformChoice::Extend => TransformKind::Extend,
            TransformChoice::Mixed => TransformKind::Mixed,
        }
    }
}
