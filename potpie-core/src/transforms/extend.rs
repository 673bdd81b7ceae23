// potpie-core/src/transforms/extend.rs
//! Length inflation: appends a space and a run of special characters (Greek,
//! CJK, Latin ligatures) so layouts get exercised against translations that are
//! 20-700% longer than the source.
//!
//! The suffix length depends only on the input length; its content is drawn
//! from an injected random generator. Seed the generator to get reproducible
//! output.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;
use std::sync::Mutex;

use crate::transform::{PseudoTransform, TransformKind};

/// Characters used to build the suffix.
pub const SPECIAL_CHARS: [char; 20] = [
    '\u{0131}', '\u{017f}', '\u{01c5}', '\u{01c8}', '\u{01cb}',
    '\u{01f2}', '\u{0390}', '\u{03b0}', '\u{03c2}', '\u{03d0}',
    '\u{03d1}', '\u{03d5}', '\u{03d6}', '\u{03f0}', '\u{03f1}',
    '\u{03f5}', '\u{1e9b}', '\u{9db1}', '\u{9750}', '\u{884b}',
];

/// Inputs longer than this grow by a flat 20%.
const FLAT_GROWTH_THRESHOLD: usize = 49;

/// Characters reserved for the two brackets and the space the mixed transform adds.
const BRACKET_RESERVE: i64 = 3;

pub struct Extend {
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl fmt::Debug for Extend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extend").finish_non_exhaustive()
    }
}

impl Default for Extend {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend {
    /// An `Extend` backed by an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// An `Extend` whose output is reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R>(rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Number of characters appended for an input of `char_count` characters.
    ///
    /// Short strings grow along a decaying curve; anything over 49 characters
    /// grows by 20%. Three characters are held back for the mixed transform's
    /// brackets and separator, and the result never goes below zero.
    pub fn suffix_len(char_count: usize) -> usize {
        let n = if char_count > FLAT_GROWTH_THRESHOLD {
            (char_count as f64 * 0.2) as i64
        } else {
            let size = char_count as f64;
            let base = (char_count / 3 + 1) as f64;
            (size * (6.8 / base.powf(1.13) + 1.0) - size) as i64
        };
        (n - BRACKET_RESERVE).max(0) as usize
    }

    /// Builds the suffix for `input`.
    ///
    /// The leading characters of the input, trimmed, are used as a template
    /// (topped up from the end of [`SPECIAL_CHARS`] when the input is too
    /// short); every non-whitespace template character is then replaced by a
    /// random special character.
    pub fn extended_text(&self, input: &str) -> String {
        let n = Self::suffix_len(input.chars().count());
        let head: String = input.chars().take(n).collect();
        let mut template: Vec<char> = head.trim().chars().collect();

        let shortage = n - template.len();
        if shortage > 0 {
            let table_len = SPECIAL_CHARS.len();
            let start = table_len - shortage % table_len;
            template.extend((0..shortage).map(|i| SPECIAL_CHARS[(start + i) % table_len]));
        }

        let mut guard = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let rng: &mut Box<dyn RngCore + Send> = &mut guard;
        for c in template.iter_mut().filter(|c| !c.is_whitespace()) {
            *c = SPECIAL_CHARS[rng.random_range(0..SPECIAL_CHARS.len())];
        }

        debug!("Extending {} character(s) by {}", input.chars().count(), n);
        template.into_iter().collect()
    }
}

impl PseudoTransform for Extend {
    fn kind(&self) -> TransformKind {
        TransformKind::Extend
    }

    fn base_transform(&self, input: &str) -> String {
        let suffix = self.extended_text(input);
        let mut out = String::with_capacity(input.len() + 1 + suffix.len());
        out.push_str(input);
        out.push(' ');
        out.push_str(&suffix);
        out
    }
}
