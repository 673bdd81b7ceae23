// potpie-core/src/transforms/planguage.rs
//! P-language: a vowel-extending pseudo language that grows text by roughly
//! 30-50% while keeping it readable.
//!
//! Every maximal run of vowels is accented and then repeated after a Hebrew
//! Qof (`ק`), which looks a little like a `p`:
//!
//! * `hello`   → `hé` `ק` `é` `llô` `ק` `ô`
//! * `because` → `bé` `ק` `é` `cåü` `ק` `åü` `sé` `ק` `é`

use crate::splitter::{split_and_transform, PROTECTED_CHAIN};
use crate::transform::{PseudoTransform, TransformKind};

/// Hebrew letter Qof.
pub const QOF: char = '\u{05e7}';

#[derive(Debug, Default, Clone, Copy)]
pub struct PLanguage;

impl PLanguage {
    pub fn new() -> Self {
        Self
    }

    /// The accented counterpart of a vowel, or `None` for anything else.
    pub fn map_vowel(c: char) -> Option<char> {
        match c {
            'a' => Some('\u{00e5}'),
            'e' => Some('\u{00e9}'),
            'i' => Some('\u{00ef}'),
            'o' => Some('\u{00f4}'),
            'u' => Some('\u{00fc}'),
            'y' => Some('\u{00fd}'),
            'A' => Some('\u{00c5}'),
            'E' => Some('\u{00c9}'),
            'I' => Some('\u{00cf}'),
            'O' => Some('\u{00d4}'),
            'U' => Some('\u{00dc}'),
            'Y' => Some('\u{00dd}'),
            _ => None,
        }
    }

    fn extend_vowels(segment: &str) -> String {
        let mut out = String::with_capacity(segment.len() * 2);
        let mut chars = segment.chars().peekable();
        while let Some(c) = chars.next() {
            let Some(first) = Self::map_vowel(c) else {
                out.push(c);
                continue;
            };
            let mut run = String::new();
            run.push(first);
            while let Some(mapped) = chars.peek().and_then(|&next| Self::map_vowel(next)) {
                run.push(mapped);
                chars.next();
            }
            out.push_str(&run);
            out.push(QOF);
            out.push_str(&run);
        }
        out
    }
}

impl PseudoTransform for PLanguage {
    fn kind(&self) -> TransformKind {
        TransformKind::PLanguage
    }

    fn base_transform(&self, input: &str) -> String {
        split_and_transform(input, &PROTECTED_CHAIN, &Self::extend_vowels)
    }
}
