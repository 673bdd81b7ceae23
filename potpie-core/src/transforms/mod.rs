// potpie-core/src/transforms/mod.rs
//! Concrete implementations of the `PseudoTransform` trait.
//!
//! Each strategy lives in its own file. [`build_transform`] is the single place
//! that maps a [`TransformKind`] to an implementation.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod brackets;
pub mod extend;
pub mod mixed;
pub mod planguage;
pub mod unicode;

pub use brackets::Brackets;
pub use extend::{Extend, SPECIAL_CHARS};
pub use mixed::Mixed;
pub use planguage::{PLanguage, QOF};
pub use unicode::Unicode;

use log::debug;

use crate::transform::{PseudoTransform, TransformKind};

/// Instantiates the strategy for `kind`.
///
/// `seed` only affects strategies that draw random characters; without it
/// they are seeded from the OS.
pub fn build_transform(kind: TransformKind, seed: Option<u64>) -> Box<dyn PseudoTransform> {
    debug!("Building '{}' transform (seeded: {})", kind, seed.is_some());
    let extend = || match seed {
        Some(seed) => Extend::with_seed(seed),
        None => Extend::new(),
    };
    match kind {
        TransformKind::Brackets => Box::new(Brackets),
        TransformKind::Unicode => Box::new(Unicode),
        TransformKind::PLanguage => Box::new(PLanguage),
        TransformKind::Extend => Box::new(extend()),
        TransformKind::Mixed => Box::new(Mixed::with_extend(extend())),
    }
}
