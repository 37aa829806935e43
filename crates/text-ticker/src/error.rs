//! Error types for the ticker widget.

use std::path::PathBuf;

/// Result type alias for ticker operations.
pub type Result<T> = std::result::Result<T, TickerError>;

/// Errors that can occur while configuring or rendering a ticker.
///
/// None of these escape the widget's lifecycle callbacks: the widget logs
/// them as diagnostics and degrades to a static or message-only ticker.
#[derive(Debug, thiserror::Error)]
pub enum TickerError {
    /// The `items` attribute is not valid JSON.
    #[error("Invalid JSON in items attribute: {0}")]
    InvalidItemsJson(#[source] serde_json::Error),

    /// The `items` attribute is valid JSON but not an array.
    #[error("Items attribute must be a JSON array, found {found}")]
    ItemsNotArray { found: &'static str },

    /// A defaults file could not be read.
    #[error("Failed to read ticker defaults '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A TOML defaults document is malformed.
    #[error("Invalid ticker defaults: {0}")]
    DefaultsToml(#[from] toml::de::Error),

    /// A JSON defaults document is malformed.
    #[error("Invalid ticker defaults: {0}")]
    DefaultsJson(#[source] serde_json::Error),

    /// Stylesheet generation failed.
    #[error(transparent)]
    Style(#[from] text_ticker_style::Error),
}

impl TickerError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
