//! splitter.rs - Structure-preserving split/transform/rejoin.
//!
//! A transform that must not touch protected tokens runs through
//! [`split_and_transform`]: the string is cut at the first recognizer's
//! matches, every gap between matches is handed down to the remaining
//! recognizers, and only the innermost gaps reach the leaf transform.
//! Matched tokens are copied through verbatim.
//!
//! License: MIT OR APACHE 2.0

use crate::recognizers::TokenClass;

/// Recognizer order used by every transform that rewrites characters.
///
/// Tags come first so attribute values inside a tag are never split further.
pub const PROTECTED_CHAIN: [TokenClass; 4] = [
    TokenClass::Tag,
    TokenClass::HtmlEntity,
    TokenClass::Printf,
    TokenClass::EscapedChar,
];

/// Applies `leaf` to every part of `input` not covered by a token from `chain`.
///
/// Gaps are always recursed into, including empty ones and the whole string
/// when the head recognizer finds nothing, so the leaf sees every gap exactly
/// once.
pub fn split_and_transform<F>(input: &str, chain: &[TokenClass], leaf: &F) -> String
where
    F: Fn(&str) -> String + ?Sized,
{
    let Some((head, tail)) = chain.split_first() else {
        return leaf(input);
    };

    let mut out = String::with_capacity(input.len() * 2);
    let mut last_end = 0usize;
    for m in head.regex().find_iter(input) {
        out.push_str(&split_and_transform(&input[last_end..m.start()], tail, leaf));
        out.push_str(m.as_str());
        last_end = m.end();
    }
    out.push_str(&split_and_transform(&input[last_end..], tail, leaf));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn upper(s: &str) -> String {
        s.to_uppercase()
    }

    #[test]
    fn empty_chain_applies_leaf_to_whole_input() {
        assert_eq!(split_and_transform("hello %s", &[], &upper), "HELLO %S");
    }

    #[test]
    fn protected_tokens_pass_through() {
        let out = split_and_transform(
            "<b>bold</b> %(name)s &amp; more\\\\n",
            &PROTECTED_CHAIN,
            &upper,
        );
        assert_eq!(out, "<b>BOLD</b> %(name)s &amp; MORE\\\\n");
    }

    #[test]
    fn leaf_sees_every_gap_including_empty_ones() {
        let seen = RefCell::new(Vec::new());
        let leaf = |s: &str| {
            seen.borrow_mut().push(s.to_string());
            s.to_string()
        };
        let out = split_and_transform("%s%d", &[TokenClass::Printf], &leaf);
        assert_eq!(out, "%s%d");
        assert_eq!(*seen.borrow(), vec!["", "", ""]);
    }

    #[test]
    fn no_matches_still_recurses_through_chain() {
        let calls = RefCell::new(0);
        let leaf = |s: &str| {
            *calls.borrow_mut() += 1;
            s.to_uppercase()
        };
        assert_eq!(split_and_transform("plain", &PROTECTED_CHAIN, &leaf), "PLAIN");
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn printf_inside_tag_is_left_alone() {
        let out = split_and_transform("<a title=\"%s\">x</a>", &PROTECTED_CHAIN, &upper);
        assert_eq!(out, "<a title=\"%s\">X</a>");
    }
}
