//! recognizers.rs - Regex matchers for substrings that must survive a transform.
//!
//! Four token classes are recognized: markup tags, HTML entities, printf-style
//! placeholders and rendered escape sequences. Each class owns one compiled
//! pattern, built once and shared process-wide. Matches are always returned
//! in document order and never overlap within a class.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Pattern for printf-style placeholders such as `%s`, `%1$d`, `%(name)s` or `%.2f`.
///
/// Shared with [`crate::validators::PrintfValidator`] so that what the splitter
/// protects is exactly what the validator counts.
/// Character classes are ASCII only, so `50%é` is not a placeholder.
pub const PRINTF_PATTERN: &str =
    r"%(?:(?P<ord>[0-9]+)\$|\((?P<key>[0-9A-Za-z_]+)\))?(?P<fullvar>[+#-]*(?:[0-9]+)?(?:\.[0-9]+)?(?:hh|h|ll|l)?(?P<type>[0-9A-Za-z_%]))";

/// Pattern for XML/HTML tags, raw or entity-encoded, spanning newlines.
pub const TAG_PATTERN: &str = r"(?:<|&lt;).*?(?:>|&gt;)";

/// Pattern for named HTML entities such as `&amp;`.
pub const HTML_ENTITY_PATTERN: &str = r"&[a-zA-Z]+;";

/// Pattern for rendered escape sequences: two backslashes and one ASCII word character.
pub const ESCAPED_CHAR_PATTERN: &str = r"\\\\[0-9A-Za-z_]";

fn build(name: &str, pattern: &str, dot_matches_new_line: bool) -> Regex {
    debug!("Compiling recognizer '{}' with pattern '{}'", name, pattern);
    RegexBuilder::new(pattern)
        .dot_matches_new_line(dot_matches_new_line)
        .build()
        .unwrap_or_else(|e| panic!("built-in recognizer '{}' failed to compile: {}", name, e))
}

lazy_static! {
    static ref PRINTF_RE: Regex = build("printf", PRINTF_PATTERN, false);
    static ref TAG_RE: Regex = build("tag", TAG_PATTERN, true);
    static ref HTML_ENTITY_RE: Regex = build("html_entity", HTML_ENTITY_PATTERN, false);
    static ref ESCAPED_CHAR_RE: Regex = build("escaped_char", ESCAPED_CHAR_PATTERN, false);
}

/// A class of protected substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `<b>`, `</a>`, `&lt;br/&gt;`.
    Tag,
    /// `&amp;`, `&nbsp;`.
    HtmlEntity,
    /// `%s`, `%(count)d`, `%2$s`.
    Printf,
    /// `\\n`, `\\t`.
    EscapedChar,
}

impl TokenClass {
    /// The compiled pattern for this class.
    pub fn regex(self) -> &'static Regex {
        match self {
            TokenClass::Tag => &TAG_RE,
            TokenClass::HtmlEntity => &HTML_ENTITY_RE,
            TokenClass::Printf => &PRINTF_RE,
            TokenClass::EscapedChar => &ESCAPED_CHAR_RE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenClass::Tag => "tag",
            TokenClass::HtmlEntity => "html_entity",
            TokenClass::Printf => "printf",
            TokenClass::EscapedChar => "escaped_char",
        }
    }

    /// Finds every token of this class in `input`, left to right.
    pub fn find_tokens<'a>(self, input: &'a str) -> Vec<ProtectedToken<'a>> {
        self.regex()
            .find_iter(input)
            .map(|m| ProtectedToken {
                class: self,
                text: m.as_str(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognized substring that a transform must leave untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectedToken<'a> {
    pub class: TokenClass,
    pub text: &'a str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// Every protected token in `input` for the given chain, in document order.
///
/// Tokens found by a later class inside a token of an earlier class are not
/// reported, matching how the splitter consumes them.
pub fn find_protected_tokens<'a>(input: &'a str, chain: &[TokenClass]) -> Vec<ProtectedToken<'a>> {
    let mut found = Vec::new();
    collect_tokens(input, 0, chain, &mut found);
    found.sort_by_key(|t| t.start);
    found
}

fn collect_tokens<'a>(
    input: &'a str,
    offset: usize,
    chain: &[TokenClass],
    found: &mut Vec<ProtectedToken<'a>>,
) {
    let Some((head, tail)) = chain.split_first() else {
        return;
    };
    let mut last_end = 0;
    for token in head.find_tokens(input) {
        collect_tokens(&input[last_end..token.start], offset + last_end, tail, found);
        found.push(ProtectedToken {
            start: token.start + offset,
            end: token.end + offset,
            ..token
        });
        last_end = token.end;
    }
    collect_tokens(&input[last_end..], offset + last_end, tail, found);
}
