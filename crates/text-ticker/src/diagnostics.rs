//! Operator-facing diagnostics.
//!
//! Diagnostics never reach the end user; the ticker degrades to a message or
//! a static strip. They are logged under the diagnostics target and emitted
//! on the widget's diagnostics signal.

use std::fmt;

use text_ticker_core::logging::targets;

use crate::TickerError;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Something was skipped but the ticker is otherwise fine.
    Warning,
    /// Configuration was rejected.
    Error,
}

/// A problem the ticker recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The `items` attribute is not valid JSON.
    InvalidItemsJson {
        /// Parser message.
        message: String,
    },
    /// The `items` attribute is not a JSON array.
    ItemsNotArray {
        /// JSON type that was found instead.
        found: &'static str,
    },
    /// The measured cycle width was zero, so the animation was not started.
    ZeroCycleWidth,
    /// Any other failure while building styles.
    Style {
        /// Error message.
        message: String,
    },
}

impl Diagnostic {
    /// Severity of this diagnostic.
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Self::ZeroCycleWidth => DiagnosticLevel::Warning,
            _ => DiagnosticLevel::Error,
        }
    }

    /// Log this diagnostic under the diagnostics target.
    pub fn log(&self) {
        match self.level() {
            DiagnosticLevel::Warning => tracing::warn!(target: targets::DIAGNOSTICS, "{}", self),
            DiagnosticLevel::Error => tracing::error!(target: targets::DIAGNOSTICS, "{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemsJson { message } => {
                write!(f, "Invalid JSON in items attribute: {message}")
            }
            Self::ItemsNotArray { found } => {
                write!(f, "Items attribute must be a JSON array (found {found})")
            }
            Self::ZeroCycleWidth => write!(f, "Cycle width is 0, cannot start animation."),
            Self::Style { message } => write!(f, "Failed to update ticker styles: {message}"),
        }
    }
}

impl From<&TickerError> for Diagnostic {
    fn from(err: &TickerError) -> Self {
        match err {
            TickerError::InvalidItemsJson(source) => Self::InvalidItemsJson {
                message: source.to_string(),
            },
            TickerError::ItemsNotArray { found } => Self::ItemsNotArray { found },
            other => Self::Style {
                message: other.to_string(),
            },
        }
    }
}
