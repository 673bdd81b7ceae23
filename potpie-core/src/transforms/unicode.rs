// potpie-core/src/transforms/unicode.rs
//! Look-alike substitution: every ASCII letter becomes an accented or hooked
//! character that still reads as the original, so untranslated (hard-coded)
//! strings stand out while the UI stays usable.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::splitter::{split_and_transform, PROTECTED_CHAIN};
use crate::transform::{PseudoTransform, TransformKind};

// Every ASCII letter has a look-alike, `Z`/`z` included, so `INVERSE` covers the whole alphabet.
const UPPER: [char; 26] = [
    'Ȧ', 'Ɓ', 'Ƈ', 'Ḓ', 'Ḗ', 'Ƒ', 'Ɠ', 'Ħ', 'Ī', 'Ĵ', 'Ķ', 'Ŀ', 'Ḿ',
    'Ƞ', 'Ǿ', 'Ƥ', 'Ɋ', 'Ř', 'Ş', 'Ŧ', 'Ŭ', 'Ṽ', 'Ẇ', 'Ẋ', 'Ẏ', 'Ẑ',
];

const LOWER: [char; 26] = [
    'ȧ', 'ƀ', 'ƈ', 'ḓ', 'ḗ', 'ƒ', 'ɠ', 'ħ', 'ī', 'ĵ', 'ķ', 'ŀ', 'ḿ',
    'ƞ', 'ǿ', 'ƥ', 'ɋ', 'ř', 'ş', 'ŧ', 'ŭ', 'ṽ', 'ẇ', 'ẋ', 'ẏ', 'ẑ',
];

static INVERSE: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(52);
    map.extend(UPPER.iter().zip('A'..='Z').map(|(&lookalike, ascii)| (lookalike, ascii)));
    map.extend(LOWER.iter().zip('a'..='z').map(|(&lookalike, ascii)| (lookalike, ascii)));
    map
});

#[derive(Debug, Default, Clone, Copy)]
pub struct Unicode;

impl Unicode {
    pub fn new() -> Self {
        Self
    }

    /// The look-alike for `c`, or `c` itself outside `A-Z`/`a-z`.
    pub fn transpose(c: char) -> char {
        match c {
            'A'..='Z' => UPPER[(c as u8 - b'A') as usize],
            'a'..='z' => LOWER[(c as u8 - b'a') as usize],
            _ => c,
        }
    }

    /// Maps a look-alike back to its ASCII letter; other characters pass through.
    pub fn restore(c: char) -> char {
        INVERSE.get(&c).copied().unwrap_or(c)
    }

    /// Applies [`Unicode::restore`] to every character of `input`.
    pub fn restore_str(input: &str) -> String {
        input.chars().map(Self::restore).collect()
    }

    fn transpose_segment(segment: &str) -> String {
        segment.chars().map(Self::transpose).collect()
    }
}

impl PseudoTransform for Unicode {
    fn kind(&self) -> TransformKind {
        TransformKind::Unicode
    }

    fn base_transform(&self, input: &str) -> String {
        split_and_transform(input, &PROTECTED_CHAIN, &Self::transpose_segment)
    }
}
