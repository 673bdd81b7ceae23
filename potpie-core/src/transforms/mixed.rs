// potpie-core/src/transforms/mixed.rs
//! The composite transform: inflate, substitute look-alikes, then bracket.

use log::debug;

use super::{Brackets, Extend, Unicode};
use crate::transform::{PseudoTransform, TransformKind};

/// Runs [`Extend`], [`Unicode`] and [`Brackets`] in that order, each step
/// consuming the previous step's output.
#[derive(Debug, Default)]
pub struct Mixed {
    extend: Extend,
    unicode: Unicode,
    brackets: Brackets,
}

impl Mixed {
    pub fn new() -> Self {
        Self::with_extend(Extend::new())
    }

    /// A `Mixed` transform whose inflation step uses the given `Extend`.
    pub fn with_extend(extend: Extend) -> Self {
        Self {
            extend,
            unicode: Unicode,
            brackets: Brackets,
        }
    }

    /// The steps in the order they run.
    pub fn steps(&self) -> [&dyn PseudoTransform; 3] {
        [&self.extend, &self.unicode, &self.brackets]
    }
}

impl PseudoTransform for Mixed {
    fn kind(&self) -> TransformKind {
        TransformKind::Mixed
    }

    fn base_transform(&self, input: &str) -> String {
        self.steps().iter().fold(input.to_string(), |acc, step| {
            let next = step.base_transform(&acc);
            debug!("mixed step '{}' produced {} char(s)", step.kind(), next.chars().count());
            next
        })
    }
}
