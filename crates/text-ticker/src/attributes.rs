//! The declarative attribute surface of the ticker element.

use std::collections::BTreeMap;
use std::fmt;

/// An attribute the ticker observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// JSON array of strings or `{text, url?}` objects.
    Items,
    /// Literal glyph placed between items.
    Separator,
    /// Item and separator color.
    TextColor,
    /// Host background color.
    BackgroundColor,
    /// Integer scroll rate, clamped to 1..=10.
    Speed,
    /// Webfont family to load and put first in the font stack.
    GoogleFont,
    /// Fallback font family.
    FontFamily,
    /// Text weight.
    FontWeight,
    /// Text size.
    FontSize,
}

/// What an attribute change has to rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeRoute {
    /// Reparse items, rebuild content, re-animate.
    Items,
    /// Ensure the webfont link, then rebuild styles.
    Webfont,
    /// Rebuild styles and content, re-animate.
    Content,
    /// Rebuild styles only.
    Style,
}

impl Attribute {
    /// Every observed attribute.
    pub const ALL: [Attribute; 9] = [
        Attribute::Items,
        Attribute::Separator,
        Attribute::TextColor,
        Attribute::BackgroundColor,
        Attribute::Speed,
        Attribute::GoogleFont,
        Attribute::FontFamily,
        Attribute::FontWeight,
        Attribute::FontSize,
    ];

    /// The attribute name as written on the element.
    pub fn name(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Separator => "separator",
            Self::TextColor => "text-color",
            Self::BackgroundColor => "background-color",
            Self::Speed => "speed",
            Self::GoogleFont => "google-font",
            Self::FontFamily => "font-family",
            Self::FontWeight => "font-weight",
            Self::FontSize => "font-size",
        }
    }

    /// Look up an observed attribute by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.name() == name)
    }

    /// The rebuild a change to this attribute requires.
    pub fn route(self) -> ChangeRoute {
        match self {
            Self::Items => ChangeRoute::Items,
            Self::GoogleFont => ChangeRoute::Webfont,
            Self::Separator | Self::FontFamily | Self::FontWeight | Self::FontSize => {
                ChangeRoute::Content
            }
            Self::TextColor | Self::BackgroundColor | Self::Speed => ChangeRoute::Style,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A change to one attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeChange {
    /// The attribute name.
    pub name: String,
    /// The previous value, `None` if it was absent.
    pub old_value: Option<String>,
    /// The new value, `None` if it was removed.
    pub new_value: Option<String>,
}

/// The string attributes set on the element.
///
/// Values are stored verbatim; an empty string is a present attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    values: BTreeMap<String, String>,
}

impl AttributeMap {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Get an observed attribute, treating the empty string as absent.
    pub fn non_empty(&self, attribute: Attribute) -> Option<&str> {
        self.get(attribute.name()).filter(|v| !v.is_empty())
    }

    /// Set an attribute.
    ///
    /// Returns the change, or `None` when the value is unchanged.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<AttributeChange> {
        let value = value.into();
        let old_value = self.values.insert(name.to_string(), value.clone());
        if old_value.as_deref() == Some(value.as_str()) {
            return None;
        }
        Some(AttributeChange {
            name: name.to_string(),
            old_value,
            new_value: Some(value),
        })
    }

    /// Remove an attribute.
    ///
    /// Returns the change, or `None` when the attribute was already absent.
    pub fn remove(&mut self, name: &str) -> Option<AttributeChange> {
        let old_value = self.values.remove(name)?;
        Some(AttributeChange {
            name: name.to_string(),
            old_value: Some(old_value),
            new_value: None,
        })
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
