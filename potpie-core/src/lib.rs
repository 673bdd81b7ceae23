// potpie-core/src/lib.rs
//! # potpie Core Library
//!
//! `potpie-core` produces pseudo-translations of localization catalogs: each
//! source string is rewritten (bracketed, swapped for look-alike characters,
//! vowel-extended or padded) so that untranslated text, truncation and
//! encoding problems show up in a UI before real translations exist.
//!
//! Substrings that carry meaning for the program rather than the reader
//! (printf placeholders, markup tags, HTML entities and escape sequences) are
//! never touched.
//!
//! ## Modules
//!
//! * `recognizers`: Regex matchers for the four protected token classes.
//! * `splitter`: The recursive split/transform/rejoin that keeps protected tokens intact.
//! * `transform`: The `PseudoTransform` trait and the closed set of `TransformKind`s.
//! * `transforms`: Concrete strategies (`Brackets`, `Unicode`, `PLanguage`, `Extend`, `Mixed`).
//! * `dispatch`: Format-aware edge handling (`FormatContext`, `PseudoTranslator`).
//! * `validators`: Printf placeholder validation between two translations.
//! * `catalog`: PO and JSON catalog adapters behind the `Catalog` trait.
//! * `translator`: Runs a `PseudoTranslator` over a whole catalog.
//! * `config`: YAML run configuration.
//! * `errors`: The `PotpieError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use potpie_core::{pseudo_translate_string, FormatContext, TransformKind};
//!
//! let out = pseudo_translate_string("\nHello %s\n", TransformKind::Brackets, FormatContext::Po, None);
//! assert_eq!(out, "\n[Hello %s]\n");
//!
//! let out = pseudo_translate_string("Hello %s", TransformKind::Unicode, FormatContext::Generic, None);
//! assert_eq!(out, "Ħḗŀŀǿ %s");
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`PotpieError`]. Unknown transform names
//! and invalid configuration fail before any catalog is touched; catalog parse
//! errors abort the run.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod recognizers;
pub mod splitter;
pub mod transform;
pub mod transforms;
pub mod translator;
pub mod validators;

/// Re-exports the error type.
pub use errors::{PotpieError, Result};

/// Re-exports the transform trait, the transform kinds and the strategies.
pub use transform::{PseudoTransform, TransformKind};
pub use transforms::{build_transform, Brackets, Extend, Mixed, PLanguage, Unicode};

/// Re-exports the protected-token machinery.
pub use recognizers::{find_protected_tokens, ProtectedToken, TokenClass};
pub use splitter::{split_and_transform, PROTECTED_CHAIN};

/// Re-exports the format-aware front end.
pub use dispatch::{FormatContext, PseudoTranslator};

/// Re-exports the catalog contract and its adapters.
pub use catalog::{open_catalog, Catalog, CatalogEntry, CatalogKind, JsonCatalog, PoCatalog, PoHeader};

/// Re-exports the catalog runner.
pub use translator::{pseudo_translate_string, translate_catalog, validate_catalog, TranslationReport};

/// Re-exports validation types.
pub use validators::{Language, PrintfValidator, Validator};

/// Re-exports configuration loading.
pub use config::{config_candidate_paths, load_default_config, PotpieConfig};
