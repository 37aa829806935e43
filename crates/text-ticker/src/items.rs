//! Ticker items and the `items` attribute parser.

use serde_json::Value;

use crate::{Result, TickerError};

/// One entry of the ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerItem {
    /// A plain text entry.
    Text(String),
    /// A structured entry, rendered as a link when it carries a url.
    Structured {
        /// The displayed text.
        text: String,
        /// Link target.
        url: Option<String>,
    },
}

impl TickerItem {
    /// The displayed text.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Structured { text, .. } => text,
        }
    }

    /// The link target, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Structured { url, .. } => url.as_deref(),
        }
    }

    /// Build an item from one JSON array entry.
    ///
    /// Returns `None` for anything that does not carry displayable text.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) if has_text(text) => Some(Self::Text(text.clone())),
            Value::Object(fields) => {
                let text = fields.get("text")?.as_str().filter(|t| has_text(t))?;
                let url = fields
                    .get("url")
                    .and_then(Value::as_str)
                    .filter(|u| !u.is_empty())
                    .map(str::to_string);
                Some(Self::Structured {
                    text: text.to_string(),
                    url,
                })
            }
            _ => None,
        }
    }
}

/// The validation predicate: text must be non-empty after trimming.
fn has_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// The ordered list of items, always rebuilt as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<TickerItem>,
}

impl ItemList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there is nothing to display.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TickerItem> {
        self.items.iter()
    }
}

impl FromIterator<TickerItem> for ItemList {
    fn from_iter<T: IntoIterator<Item = TickerItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a TickerItem;
    type IntoIter = std::slice::Iter<'a, TickerItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Parse the raw `items` attribute.
///
/// An absent or empty attribute is an empty list. Malformed JSON and
/// non-array payloads are errors; entries without displayable text are
/// dropped silently.
pub fn parse_items(raw: Option<&str>) -> Result<ItemList> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Ok(ItemList::new());
    };

    let parsed: Value = serde_json::from_str(raw).map_err(TickerError::InvalidItemsJson)?;
    let entries = match parsed {
        Value::Array(entries) => entries,
        other => {
            return Err(TickerError::ItemsNotArray {
                found: json_kind(&other),
            });
        }
    };

    Ok(entries.iter().filter_map(TickerItem::from_json).collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_is_empty_list() {
        assert!(parse_items(None).unwrap().is_empty());
        assert!(parse_items(Some("")).unwrap().is_empty());
        assert!(parse_items(Some("[]")).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            parse_items(Some("[\"a\", ")),
            Err(TickerError::InvalidItemsJson(_))
        ));
        assert!(matches!(
            parse_items(Some("   ")),
            Err(TickerError::InvalidItemsJson(_))
        ));
    }

    #[test]
    fn non_array_is_reported() {
        let err = parse_items(Some(r#"{"text": "A"}"#)).unwrap_err();
        assert!(matches!(err, TickerError::ItemsNotArray { found: "object" }));

        let err = parse_items(Some("42")).unwrap_err();
        assert!(matches!(err, TickerError::ItemsNotArray { found: "number" }));
    }

    #[test]
    fn invalid_entries_are_dropped() {
        let items = parse_items(Some(
            r#"["A", "", "   ", 3, null, true, [], {}, {"text": ""}, {"text": 5}, {"url": "x"}, {"text": " B "}]"#,
        ))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items.iter().next(), Some(&TickerItem::Text("A".into())));
        // Text is kept untrimmed; trimming only decides validity.
        assert_eq!(items.iter().nth(1).map(TickerItem::text), Some(" B "));
    }

    #[test]
    fn structured_items_keep_string_urls() {
        let items = parse_items(Some(
            r#"[{"text": "Docs", "url": "https://example.com"}, {"text": "No link", "url": ""}, {"text": "Odd", "url": 7}]"#,
        ))
        .unwrap();
        let urls: Vec<_> = items.iter().map(TickerItem::url).collect();

        assert_eq!(urls, vec![Some("https://example.com"), None, None]);
    }
}
