// File: potpie-core/src/validators.rs
//! Checks that compare a new translation against the string it replaces.
//!
//! Validators only report: a failing check yields a
//! [`PotpieError::Validation`] describing the problem, and the translation is
//! left as it is.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::{PotpieError, Result};
use crate::recognizers::TokenClass;

/// A language as far as validation cares: its code and plural form count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub nplurals: usize,
}

impl Language {
    pub fn new(code: impl Into<String>, nplurals: usize) -> Self {
        Self {
            code: code.into(),
            nplurals,
        }
    }

    /// English: two plural forms.
    pub fn english() -> Self {
        Self::new("en", 2)
    }
}

/// A check of a new translation against an old one.
pub trait Validator {
    /// Whether this validator applies at all.
    fn precondition(&self) -> bool {
        true
    }

    /// The actual comparison. Only called when [`Validator::check`] decides it applies.
    fn validate(&self, old: &str, new: &str) -> Result<()>;

    /// Validates `new` against `old`.
    ///
    /// Deleted (empty) translations and inapplicable situations always pass.
    fn check(&self, old: &str, new: &str) -> Result<()> {
        if new.is_empty() || !self.precondition() {
            return Ok(());
        }
        self.validate(old, new)
    }
}

/// Verifies that a translation keeps the same number of printf placeholders.
///
/// Only meaningful when both languages have the same number of plural forms;
/// otherwise a plural form may legitimately drop its count placeholder.
#[derive(Debug, Clone)]
pub struct PrintfValidator {
    source: Language,
    target: Language,
}

impl PrintfValidator {
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    /// Number of printf placeholders in `s`, using the splitter's own pattern.
    pub fn count_placeholders(s: &str) -> usize {
        TokenClass::Printf.regex().find_iter(s).count()
    }
}

impl Validator for PrintfValidator {
    fn precondition(&self) -> bool {
        self.source.nplurals == self.target.nplurals
    }

    fn validate(&self, old: &str, new: &str) -> Result<()> {
        let old_count = Self::count_placeholders(old);
        let new_count = Self::count_placeholders(new);
        if old_count != new_count {
            return Err(PotpieError::Validation(format!(
                "The number of arguments seems to differ between the source string and the translation ({} vs {}).",
                old_count, new_count
            )));
        }
        Ok(())
    }
}
