// potpie-core/src/translator.rs
//! Runs a [`PseudoTranslator`] over a whole catalog.
//!
//! Every entry's target is overwritten with the pseudo-translation of its
//! source. An optional validator then compares each source with its new
//! target; findings are logged and counted but never fixed. Any error while
//! filling aborts the whole run.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, info, warn};

use crate::catalog::Catalog;
use crate::dispatch::{FormatContext, PseudoTranslator};
use crate::errors::Result;
use crate::transform::TransformKind;
use crate::validators::Validator;

lazy_static! {
    /// Whether debug logs may show message text in full.
    static ref FULL_TEXT_LOGGING: bool = {
        std::env::var("POTPIE_LOG_FULL_TEXT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Longest text shown in debug logs unless full-text logging is enabled.
const MAX_LOGGED_CHARS: usize = 32;

/// Message text suitable for a debug log line.
pub fn loggable_text(text: &str) -> String {
    let count = text.chars().count();
    if *FULL_TEXT_LOGGING || count <= MAX_LOGGED_CHARS {
        format!("{:?}", text)
    } else {
        let head: String = text.chars().take(MAX_LOGGED_CHARS).collect();
        format!("{:?}... ({} chars)", head, count)
    }
}

/// Outcome of a catalog run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    /// Targets written.
    pub entries: usize,
    /// Source/target pairs the validator flagged.
    pub validation_failures: usize,
}

/// Pseudo-translates every entry of `catalog` in place.
pub fn translate_catalog(
    catalog: &mut dyn Catalog,
    translator: &PseudoTranslator,
    validator: Option<&dyn Validator>,
) -> Result<TranslationReport> {
    info!(
        "Pseudo-translating {} entries with '{}' ({} format)",
        catalog.len(),
        translator.kind(),
        translator.format()
    );

    let entries = catalog.fill_targets(&mut |source: &str| -> Result<String> {
        let target = translator.compile(source);
        debug!("{} -> {}", loggable_text(source), loggable_text(&target));
        Ok(target)
    })?;

    let validation_failures = match validator {
        Some(v) => validate_catalog(catalog, v),
        None => 0,
    };

    info!(
        "Pseudo-translated {} entries ({} validation finding(s))",
        entries, validation_failures
    );
    Ok(TranslationReport {
        entries,
        validation_failures,
    })
}

/// Runs `validator` over every source/target pair and returns how many failed.
pub fn validate_catalog(catalog: &dyn Catalog, validator: &dyn Validator) -> usize {
    let mut failures = 0usize;
    for entry in catalog.entries() {
        if let Err(e) = validator.check(&entry.source, &entry.target) {
            warn!("{}: {}", loggable_text(&entry.source), e);
            failures += 1;
        }
    }
    failures
}

/// One-shot pseudo-translation of a single string.
pub fn pseudo_translate_string(
    input: &str,
    kind: TransformKind,
    format: FormatContext,
    seed: Option<u64>,
) -> String {
    PseudoTranslator::for_kind(kind, format, seed).compile(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, JsonCatalog};
    use crate::validators::{Language, PrintfValidator};

    #[test]
    fn fills_every_target() -> Result<()> {
        let mut catalog = JsonCatalog::new(vec![
            CatalogEntry::new("Hello", "old"),
            CatalogEntry::new("\nBye\n", ""),
        ]);
        let translator = PseudoTranslator::for_kind(TransformKind::Brackets, FormatContext::Po, None);
        let report = translate_catalog(&mut catalog, &translator, None)?;
        assert_eq!(report, TranslationReport { entries: 2, validation_failures: 0 });
        assert_eq!(catalog.as_slice()[0].target, "[Hello]");
        assert_eq!(catalog.as_slice()[1].target, "\n[Bye]\n");
        Ok(())
    }

    #[test]
    fn validator_counts_but_does_not_fix() -> Result<()> {
        let mut catalog = JsonCatalog::new(vec![CatalogEntry::new("%s files", "")]);
        // A transform that preserves placeholders never trips the validator.
        let translator = PseudoTranslator::for_kind(TransformKind::Unicode, FormatContext::Generic, None);
        let validator = PrintfValidator::new(Language::english(), Language::new("fr", 2));
        let report = translate_catalog(&mut catalog, &translator, Some(&validator))?;
        assert_eq!(report.validation_failures, 0);

        let broken = JsonCatalog::new(vec![CatalogEntry::new("%s files", "fichiers")]);
        assert_eq!(validate_catalog(&broken, &validator), 1);
        assert_eq!(broken.as_slice()[0].target, "fichiers");
        Ok(())
    }

    #[test]
    fn loggable_text_truncates_long_messages() {
        assert_eq!(loggable_text("short"), "\"short\"");
        let long = "x".repeat(40);
        if !*FULL_TEXT_LOGGING {
            assert!(loggable_text(&long).ends_with("... (40 chars)"));
        }
    }

    #[test]
    fn one_shot_translation() {
        assert_eq!(
            pseudo_translate_string("\nHello\n", TransformKind::Brackets, FormatContext::Po, None),
            "\n[Hello]\n"
        );
    }
}
