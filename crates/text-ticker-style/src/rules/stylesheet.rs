//! Stylesheet collection and serialization.

use std::fmt;

use crate::rules::{MediaBlock, StyleRule};

/// A top-level stylesheet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetItem {
    /// A plain rule.
    Rule(StyleRule),
    /// An `@media` block.
    Media(MediaBlock),
}

impl fmt::Display for SheetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(rule) => rule.fmt(f),
            Self::Media(block) => block.fmt(f),
        }
    }
}

/// An ordered stylesheet.
///
/// Serializes to a single line, entries separated by one space, which is the
/// form the ticker writes into its `<style>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    /// The entries in source order.
    pub items: Vec<SheetItem>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn add_rule(&mut self, rule: StyleRule) {
        self.items.push(SheetItem::Rule(rule));
    }

    /// Append a media block.
    pub fn add_media(&mut self, block: MediaBlock) {
        self.items.push(SheetItem::Media(block));
    }

    /// Find the first top-level rule with exactly this selector.
    pub fn rule(&self, selector: &str) -> Option<&StyleRule> {
        self.items.iter().find_map(|item| match item {
            SheetItem::Rule(rule) if rule.selector == selector => Some(rule),
            _ => None,
        })
    }

    /// Find the first media block with exactly this query.
    pub fn media(&self, query: &str) -> Option<&MediaBlock> {
        self.items.iter().find_map(|item| match item {
            SheetItem::Media(block) if block.query == query => Some(block),
            _ => None,
        })
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize to CSS text.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            item.fmt(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_creation() {
        let mut sheet = StyleSheet::new();
        assert!(sheet.is_empty());

        sheet.add_rule(StyleRule::new(".ticker-item").declare("color", "#333"));

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.to_css(), ".ticker-item { color: #333; }");
    }

    #[test]
    fn lookup_by_selector_and_query() {
        let mut sheet = StyleSheet::new();
        sheet.add_rule(StyleRule::new("A").declare("color", "red"));
        sheet.add_rule(StyleRule::new("B").declare("color", "blue"));
        sheet.add_media(MediaBlock::new("print").with_rule(StyleRule::new("A")));

        assert_eq!(sheet.rule("B").and_then(|r| r.value_of("color")), Some("blue"));
        assert!(sheet.rule("C").is_none());
        assert_eq!(sheet.media("print").map(|m| m.rules.len()), Some(1));
    }

    #[test]
    fn entries_joined_by_single_space() {
        let mut sheet = StyleSheet::new();
        sheet.add_rule(StyleRule::new("A"));
        sheet.add_media(MediaBlock::new("print").with_rule(StyleRule::new("B").declare("color", "red")));

        assert_eq!(sheet.to_css(), "A { } @media print { B { color: red; } }");
    }
}
