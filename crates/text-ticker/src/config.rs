//! Ticker configuration.
//!
//! [`TickerDefaults`] holds the values used when an attribute is absent and
//! can be loaded from TOML or JSON. [`TickerConfig`] is the resolved view of
//! the element's attributes over those defaults; it is rebuilt from the
//! attributes on every event and never cached across render cycles.
//!
//! # Example
//!
//! ```
//! use text_ticker::config::TickerDefaults;
//!
//! let defaults = TickerDefaults::from_toml_str(r##"
//!     text_color = "#111"
//!     speed = 8
//! "##).unwrap();
//!
//! assert_eq!(defaults.text_color, "#111");
//! assert_eq!(defaults.separator, "|");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use text_ticker_core::logging::targets;

use crate::attributes::{Attribute, AttributeMap};
use crate::{Result, TickerError};

/// Slowest accepted speed.
pub const MIN_SPEED: u8 = 1;
/// Fastest accepted speed.
pub const MAX_SPEED: u8 = 10;

/// Fallback values for absent attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerDefaults {
    /// Glyph between items.
    pub separator: String,
    /// Item and separator color.
    pub text_color: String,
    /// Host background color.
    pub background_color: String,
    /// Fallback font family.
    pub font_family: String,
    /// Text weight.
    pub font_weight: String,
    /// Text size.
    pub font_size: String,
    /// Speed used when the attribute is absent or not a number.
    pub speed: u8,
    /// Scroll distance in pixels per second for each unit of speed.
    pub pixels_per_speed_unit: f64,
    /// Quiet period before a resize re-animates, in milliseconds.
    pub resize_debounce_ms: u64,
    /// Content shown between first render and the first content update.
    pub loading_text: String,
    /// Message shown when there is nothing to scroll.
    pub empty_message: String,
    /// Color of the empty message.
    pub message_color: String,
    /// Stylesheet endpoint for webfonts.
    pub webfont_base_url: String,
}

impl Default for TickerDefaults {
    fn default() -> Self {
        Self {
            separator: "|".to_string(),
            text_color: "#333".to_string(),
            background_color: "#f8f9fa".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            font_weight: "400".to_string(),
            font_size: "14px".to_string(),
            speed: 5,
            pixels_per_speed_unit: 25.0,
            resize_debounce_ms: 100,
            loading_text: "Loading...".to_string(),
            empty_message: "No items to display".to_string(),
            message_color: "#dc3545".to_string(),
            webfont_base_url: "https://fonts.googleapis.com/css2".to_string(),
        }
    }
}

impl TickerDefaults {
    /// Parse defaults from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Parse defaults from a JSON document. Missing keys keep their defaults.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(TickerError::DefaultsJson)
    }

    /// Load defaults from a `.json` or `.toml` file.
    ///
    /// Files with any other extension are read as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TickerError::io(path, e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let defaults = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(target: targets::WIDGET, path = %path.display(), "loaded ticker defaults");
        Ok(defaults)
    }
}

/// The element's configuration resolved over [`TickerDefaults`].
#[derive(Debug, Clone, PartialEq)]
pub struct TickerConfig {
    /// Glyph between items.
    pub separator: String,
    /// Item and separator color.
    pub text_color: String,
    /// Host background color.
    pub background_color: String,
    /// Clamped speed in `MIN_SPEED..=MAX_SPEED`.
    pub speed: u8,
    /// Webfont family, if one is requested.
    pub google_font: Option<String>,
    /// Fallback font family.
    pub font_family: String,
    /// Text weight.
    pub font_weight: String,
    /// Text size.
    pub font_size: String,
}

impl TickerConfig {
    /// Resolve the current attributes.
    ///
    /// Absent and empty attributes both fall back to the defaults.
    pub fn resolve(attributes: &AttributeMap, defaults: &TickerDefaults) -> Self {
        let text = |attribute: Attribute, fallback: &str| {
            attributes.non_empty(attribute).unwrap_or(fallback).to_string()
        };

        Self {
            separator: text(Attribute::Separator, &defaults.separator),
            text_color: text(Attribute::TextColor, &defaults.text_color),
            background_color: text(Attribute::BackgroundColor, &defaults.background_color),
            speed: parse_speed(attributes.get(Attribute::Speed.name()), defaults.speed),
            google_font: attributes.non_empty(Attribute::GoogleFont).map(str::to_string),
            font_family: text(Attribute::FontFamily, &defaults.font_family),
            font_weight: text(Attribute::FontWeight, &defaults.font_weight),
            font_size: text(Attribute::FontSize, &defaults.font_size),
        }
    }

    /// The font stack: quoted webfont first, then the fallback family.
    pub fn font_stack(&self) -> String {
        match &self.google_font {
            Some(font) => format!("\"{font}\", {}", self.font_family),
            None => self.font_family.clone(),
        }
    }
}

/// Parse the `speed` attribute.
///
/// The leading integer is taken (`" 7px"` is 7, `"3.9"` is 3); a value with
/// no leading digits falls back to `default`. The result is clamped to
/// `MIN_SPEED..=MAX_SPEED`.
pub fn parse_speed(raw: Option<&str>, default: u8) -> u8 {
    match raw.and_then(leading_integer) {
        Some(value) => value.clamp(i64::from(MIN_SPEED), i64::from(MAX_SPEED)) as u8,
        None => default.clamp(MIN_SPEED, MAX_SPEED),
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Too many digits to fit is still "very large" for clamping purposes.
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_clamps_to_range() {
        assert_eq!(parse_speed(Some("0"), 5), 1);
        assert_eq!(parse_speed(Some("-4"), 5), 1);
        assert_eq!(parse_speed(Some("50"), 5), 10);
        assert_eq!(parse_speed(Some("99999999999999999999999"), 5), 10);
        assert_eq!(parse_speed(Some("7"), 5), 7);
    }

    #[test]
    fn speed_takes_leading_integer() {
        assert_eq!(parse_speed(Some("  8px"), 5), 8);
        assert_eq!(parse_speed(Some("3.9"), 5), 3);
        assert_eq!(parse_speed(Some("+2"), 5), 2);
    }

    #[test]
    fn non_numeric_speed_uses_default() {
        assert_eq!(parse_speed(Some("fast"), 5), 5);
        assert_eq!(parse_speed(Some(""), 5), 5);
        assert_eq!(parse_speed(Some("-"), 5), 5);
        assert_eq!(parse_speed(None, 5), 5);
        assert_eq!(parse_speed(None, 40), 10);
    }

    #[test]
    fn resolve_falls_back_for_absent_and_empty() {
        let attrs: AttributeMap = [("separator", ""), ("text-color", "red")].into_iter().collect();
        let config = TickerConfig::resolve(&attrs, &TickerDefaults::default());

        assert_eq!(config.separator, "|");
        assert_eq!(config.text_color, "red");
        assert_eq!(config.background_color, "#f8f9fa");
        assert_eq!(config.speed, 5);
        assert_eq!(config.google_font, None);
        assert_eq!(config.font_size, "14px");
    }

    #[test]
    fn font_stack_puts_webfont_first() {
        let attrs: AttributeMap = [("google-font", "Open Sans"), ("font-family", "serif")]
            .into_iter()
            .collect();
        let config = TickerConfig::resolve(&attrs, &TickerDefaults::default());

        assert_eq!(config.font_stack(), "\"Open Sans\", serif");
    }

    #[test]
    fn defaults_from_json_keep_missing_keys() {
        let defaults = TickerDefaults::from_json_str(r#"{ "separator": "•", "speed": 2 }"#).unwrap();

        assert_eq!(defaults.separator, "•");
        assert_eq!(defaults.speed, 2);
        assert_eq!(defaults.font_family, "Arial, sans-serif");
        assert_eq!(defaults.resize_debounce_ms, 100);
    }

    #[test]
    fn malformed_defaults_are_errors() {
        assert!(matches!(
            TickerDefaults::from_toml_str("speed = ["),
            Err(TickerError::DefaultsToml(_))
        ));
        assert!(matches!(
            TickerDefaults::from_json_str("{"),
            Err(TickerError::DefaultsJson(_))
        ));
    }

    #[test]
    fn defaults_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("ticker.toml");
        std::fs::write(&toml_path, "background_color = \"#000\"\n").unwrap();
        let json_path = dir.path().join("ticker.json");
        std::fs::write(&json_path, r#"{"message_color": "orange"}"#).unwrap();

        assert_eq!(TickerDefaults::from_file(&toml_path).unwrap().background_color, "#000");
        assert_eq!(TickerDefaults::from_file(&json_path).unwrap().message_color, "orange");
        assert!(matches!(
            TickerDefaults::from_file(dir.path().join("missing.toml")),
            Err(TickerError::Io { .. })
        ));
    }
}
