// potpie-core/src/transform.rs
//! Defines the core `PseudoTransform` trait and the closed set of transform kinds.
//!
//! The `PseudoTransform` trait provides a pluggable interface for the different
//! pseudo-translation strategies (brackets, look-alike unicode, P-language,
//! length inflation and their composite). Format-specific edge handling lives
//! in [`crate::dispatch`]; a transform only ever sees the trimmed string.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PotpieError;

/// A string mutation policy.
///
/// Implementations must be `Send + Sync` so a single transformer can be shared
/// across threads; any internal randomness is synchronized by the implementor.
pub trait PseudoTransform: Send + Sync {
    /// Which named strategy this is.
    fn kind(&self) -> TransformKind;

    /// Transforms an already edge-trimmed string.
    ///
    /// Strategies that rewrite characters are responsible for routing the
    /// input through the protected-token splitter themselves.
    fn base_transform(&self, input: &str) -> String;
}

/// The named pseudo-translation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// Wraps the string in square brackets.
    Brackets,
    /// Replaces ASCII letters with look-alike characters.
    Unicode,
    /// Doubles every vowel run around a separator.
    #[serde(rename = "planguage")]
    PLanguage,
    /// Appends a run of special characters to grow the string.
    Extend,
    /// Extend, then Unicode, then Brackets.
    #[default]
    Mixed,
}

impl TransformKind {
    pub const ALL: [TransformKind; 5] = [
        TransformKind::Brackets,
        TransformKind::Unicode,
        TransformKind::PLanguage,
        TransformKind::Extend,
        TransformKind::Mixed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransformKind::Brackets => "brackets",
            TransformKind::Unicode => "unicode",
            TransformKind::PLanguage => "planguage",
            TransformKind::Extend => "extend",
            TransformKind::Mixed => "mixed",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformKind {
    type Err = PotpieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        TransformKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| PotpieError::UnknownTransform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_kind_case_insensitively() {
        for kind in TransformKind::ALL {
            assert_eq!(kind.as_str().parse::<TransformKind>().unwrap(), kind);
            assert_eq!(kind.as_str().to_uppercase().parse::<TransformKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_a_configuration_error() {
        let err = "pirate".parse::<TransformKind>().unwrap_err();
        assert!(matches!(err, PotpieError::UnknownTransform(ref name) if name == "pirate"));
    }

    #[test]
    fn default_is_mixed() {
        assert_eq!(TransformKind::default(), TransformKind::Mixed);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let kind: TransformKind = serde_json::from_str("\"planguage\"").unwrap();
        assert_eq!(kind, TransformKind::PLanguage);
        assert_eq!(serde_json::to_string(&TransformKind::Extend).unwrap(), "\"extend\"");
    }
}
