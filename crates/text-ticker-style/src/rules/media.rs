//! `@media` blocks.

use std::fmt;

use crate::rules::StyleRule;

/// A group of rules that applies only when a media query matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    /// The query text, e.g. `(max-width: 768px)`.
    pub query: String,
    /// The rules inside the block.
    pub rules: Vec<StyleRule>,
}

impl MediaBlock {
    /// Create an empty block for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            rules: vec![],
        }
    }

    /// Add a rule to the block.
    pub fn with_rule(mut self, rule: StyleRule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl fmt::Display for MediaBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@media {} {{", self.query)?;
        for rule in &self.rules {
            write!(f, " {rule}")?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_block_wraps_rules() {
        let block = MediaBlock::new("(max-width: 768px)")
            .with_rule(StyleRule::new(":host").declare("padding", "8px 0"))
            .with_rule(StyleRule::new(".separator").declare("margin", "0 1.5em"));

        assert_eq!(
            block.to_string(),
            "@media (max-width: 768px) { :host { padding: 8px 0; } .separator { margin: 0 1.5em; } }"
        );
    }
}
