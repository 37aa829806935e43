//! CSS length values.

use std::fmt;

use cssparser::{Parser, ParserInput, Token};

use crate::{Error, Result};

/// A CSS dimension such as `14px`, `1.2em` or `90%`.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthValue {
    /// The numeric part.
    pub value: f64,
    /// The unit, lowercase (`px`, `em`, `%`, ...).
    pub unit: String,
}

impl LengthValue {
    /// Parse a single CSS dimension or percentage token.
    ///
    /// Keywords (`large`), functions (`var(--x)`), unitless numbers and
    /// trailing tokens are rejected.
    pub fn parse(property: &str, input: &str) -> Result<Self> {
        let mut parser_input = ParserInput::new(input);
        let mut parser = Parser::new(&mut parser_input);

        let length = match parser.next() {
            Ok(Token::Dimension { value, unit, .. }) => Self {
                value: widen(*value),
                unit: unit.to_ascii_lowercase(),
            },
            Ok(Token::Percentage { unit_value, .. }) => Self {
                value: widen(*unit_value * 100.0),
                unit: "%".to_string(),
            },
            Ok(other) => {
                return Err(Error::invalid_value(
                    property,
                    format!("expected a length, found {other:?}"),
                ));
            }
            Err(_) => return Err(Error::invalid_value(property, "empty value")),
        };

        if parser.expect_exhausted().is_err() {
            return Err(Error::invalid_value(property, "unexpected trailing tokens"));
        }

        Ok(length)
    }

    /// Multiply by `factor`, rounding to two decimal places.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            value: (self.value * factor * 100.0).round() / 100.0,
            unit: self.unit.clone(),
        }
    }
}

/// Widen a tokenizer `f32`, dropping the binary noise past four decimals.
fn widen(value: f32) -> f64 {
    (f64::from(value) * 10_000.0).round() / 10_000.0
}

impl fmt::Display for LengthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(value: f64) -> LengthValue {
        LengthValue {
            value,
            unit: "px".to_string(),
        }
    }

    #[test]
    fn parses_pixels() {
        let length = LengthValue::parse("font-size", "14px").unwrap();
        assert_eq!(length, px(14.0));
        assert_eq!(length.to_string(), "14px");
    }

    #[test]
    fn parses_relative_units_and_whitespace() {
        let length = LengthValue::parse("font-size", "  1.5EM ").unwrap();
        assert_eq!(length.unit, "em");
        assert_eq!(length.value, 1.5);

        let percent = LengthValue::parse("font-size", "120%").unwrap();
        assert_eq!(percent.to_string(), "120%");
    }

    #[test]
    fn rejects_non_lengths() {
        assert!(LengthValue::parse("font-size", "large").is_err());
        assert!(LengthValue::parse("font-size", "14").is_err());
        assert!(LengthValue::parse("font-size", "var(--size)").is_err());
        assert!(LengthValue::parse("font-size", "14px 2px").is_err());
        assert!(LengthValue::parse("font-size", "").is_err());
    }

    #[test]
    fn scales_and_rounds() {
        assert_eq!(px(14.0).scaled(0.9).to_string(), "12.6px");
        assert_eq!(px(16.0).scaled(0.9).to_string(), "14.4px");
        assert_eq!(px(20.0).scaled(0.9).to_string(), "18px");
    }
}
