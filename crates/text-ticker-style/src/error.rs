//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid property value.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// A keyframes name that cannot be turned into a match pattern.
    #[error("Invalid keyframes name '{name}': {source}")]
    KeyframesPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
