// potpie-core/src/transforms/brackets.rs
//! Wraps the whole string in square brackets so truncated UI text is obvious.

use crate::transform::{PseudoTransform, TransformKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct Brackets;

impl Brackets {
    pub fn new() -> Self {
        Self
    }
}

impl PseudoTransform for Brackets {
    fn kind(&self) -> TransformKind {
        TransformKind::Brackets
    }

    fn base_transform(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() + 2);
        out.push('[');
        out.push_str(input);
        out.push(']');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_brackets() {
        assert_eq!(Brackets.base_transform("Hello"), "[Hello]");
    }

    #[test]
    fn wraps_empty_and_protected_content_verbatim() {
        assert_eq!(Brackets.base_transform(""), "[]");
        assert_eq!(Brackets.base_transform("<b>%s</b>"), "[<b>%s</b>]");
    }
}
