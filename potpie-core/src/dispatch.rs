// potpie-core/src/dispatch.rs
//! Format-aware front end for a transform.
//!
//! Some catalog formats give meaning to a character at the edges of a message:
//! gettext requires `msgstr` to start and end with `\n` whenever `msgid` does,
//! and some `.properties` dialects wrap values in double quotes. The
//! [`PseudoTranslator`] strips that character before running the transform and
//! puts it back afterwards, so it is neither bracketed nor substituted.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::transform::{PseudoTransform, TransformKind};
use crate::transforms::build_transform;

/// The serialization format of the catalog being translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatContext {
    /// gettext PO: keep a leading/trailing newline.
    Po,
    /// Java-style properties: keep a leading/trailing double quote.
    Properties,
    /// No edge handling.
    #[default]
    Generic,
}

impl FormatContext {
    /// Resolves a format name. Unknown names fall back to [`FormatContext::Generic`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "po" | "pot" => FormatContext::Po,
            "properties" => FormatContext::Properties,
            other => {
                debug!("No edge handling for format '{}'; using generic", other);
                FormatContext::Generic
            }
        }
    }

    /// The natural format for a catalog file, judged by its extension.
    pub fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_name)
            .unwrap_or_default()
    }

    /// The character preserved around the message, if any.
    pub fn edge_char(self) -> Option<char> {
        match self {
            FormatContext::Po => Some('\n'),
            FormatContext::Properties => Some('"'),
            FormatContext::Generic => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormatContext::Po => "po",
            FormatContext::Properties => "properties",
            FormatContext::Generic => "generic",
        }
    }
}

impl fmt::Display for FormatContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs `transform` on `input` with a single `edge` character held out at
/// either end.
///
/// At most one occurrence is stripped from each side; a string consisting of
/// only the edge character keeps it as the leading edge.
pub fn skip_char_around(input: &str, edge: char, transform: &dyn PseudoTransform) -> String {
    let (starts, rest) = match input.strip_prefix(edge) {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (core, ends) = match rest.strip_suffix(edge) {
        Some(core) => (core, true),
        None => (rest, false),
    };

    let transformed = transform.base_transform(core);
    let mut out = String::with_capacity(transformed.len() + 2 * edge.len_utf8());
    if starts {
        out.push(edge);
    }
    out.push_str(&transformed);
    if ends {
        out.push(edge);
    }
    out
}

/// A transform bound to a catalog format; the unit the catalog runner works with.
pub struct PseudoTranslator {
    transform: Box<dyn PseudoTransform>,
    format: FormatContext,
}

impl fmt::Debug for PseudoTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PseudoTranslator")
            .field("kind", &self.transform.kind())
            .field("format", &self.format)
            .finish()
    }
}

impl PseudoTranslator {
    pub fn new(transform: Box<dyn PseudoTransform>, format: FormatContext) -> Self {
        debug!("Pseudo translator ready: transform '{}', format '{}'", transform.kind(), format);
        Self { transform, format }
    }

    /// Builds the strategy for `kind` and binds it to `format`.
    pub fn for_kind(kind: TransformKind, format: FormatContext, seed: Option<u64>) -> Self {
        Self::new(build_transform(kind, seed), format)
    }

    pub fn kind(&self) -> TransformKind {
        self.transform.kind()
    }

    pub fn format(&self) -> FormatContext {
        self.format
    }

    /// Pseudo-translates one message.
    pub fn compile(&self, input: &str) -> String {
        match self.format.edge_char() {
            Some(edge) => skip_char_around(input, edge, self.transform.as_ref()),
            None => self.transform.base_transform(input),
        }
    }
}
