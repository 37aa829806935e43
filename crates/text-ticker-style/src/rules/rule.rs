//! Single style rule definition.

use std::fmt;

/// A `property: value` pair inside a rule block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The CSS property name.
    pub property: String,
    /// The value, emitted verbatim.
    pub value: String,
    /// Whether the declaration carries `!important`.
    pub important: bool,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

/// A style rule mapping a selector to declarations.
///
/// Declarations keep their insertion order, which is also their output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// The selector text, emitted verbatim.
    pub selector: String,
    /// The declarations in this rule.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Create an empty rule for `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: vec![],
        }
    }

    /// Add a declaration.
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
            important: false,
        });
        self
    }

    /// Add an `!important` declaration.
    pub fn declare_important(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
            important: true,
        });
        self
    }

    /// Look up the value of the last declaration of `property`.
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.selector)?;
        for declaration in &self.declarations {
            write!(f, " {declaration}")?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_serializes_in_declaration_order() {
        let rule = StyleRule::new(".separator")
            .declare("opacity", "0.7")
            .declare("margin", "0 2em");

        assert_eq!(rule.to_string(), ".separator { opacity: 0.7; margin: 0 2em; }");
    }

    #[test]
    fn important_flag_is_emitted() {
        let rule = StyleRule::new(".ticker-container:hover .ticker-content")
            .declare_important("animation-play-state", "paused");

        assert_eq!(
            rule.to_string(),
            ".ticker-container:hover .ticker-content { animation-play-state: paused !important; }"
        );
    }

    #[test]
    fn value_of_returns_last_declaration() {
        let rule = StyleRule::new(":host")
            .declare("padding", "12px 0")
            .declare("padding", "8px 0");

        assert_eq!(rule.value_of("padding"), Some("8px 0"));
        assert_eq!(rule.value_of("margin"), None);
    }
}
