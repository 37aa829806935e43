//! Stylesheet model and CSS generation for Text Ticker.
//!
//! This crate provides the pieces the ticker uses to produce its shadow
//! stylesheet:
//!
//! - **Rules**: Selector plus ordered declarations, with `!important` support
//! - **Media Blocks**: `@media` groups of rules
//! - **Keyframes**: Named `@keyframes` rules and in-place replacement of a
//!   previously installed rule inside stylesheet text
//! - **Lengths**: CSS length tokens parsed with `cssparser` and scaled
//!
//! # Example
//!
//! ```
//! use text_ticker_style::prelude::*;
//!
//! let mut sheet = StyleSheet::new();
//! sheet.add_rule(StyleRule::new(".ticker-item").declare("padding", "0 5px"));
//! sheet.add_media(
//!     MediaBlock::new("(prefers-reduced-motion: reduce)")
//!         .with_rule(StyleRule::new(".ticker-content").declare_important("animation", "none")),
//! );
//!
//! assert_eq!(
//!     sheet.to_css(),
//!     ".ticker-item { padding: 0 5px; } \
//!      @media (prefers-reduced-motion: reduce) { .ticker-content { animation: none !important; } }"
//! );
//! ```

pub mod keyframes;
pub mod rules;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::keyframes::{install_keyframes, Keyframes};
    pub use crate::rules::{Declaration, MediaBlock, StyleRule, StyleSheet};
    pub use crate::types::LengthValue;
}
