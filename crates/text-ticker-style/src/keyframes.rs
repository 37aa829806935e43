//! `@keyframes` rules and in-place installation into stylesheet text.
//!
//! The ticker keeps exactly one keyframes rule per name in its `<style>`
//! element. [`install_keyframes`] swaps an existing rule of the same name for
//! the new one, or appends the rule when none exists yet.

use std::fmt;

use regex::{NoExpand, Regex};

use crate::rules::StyleRule;
use crate::{Error, Result};

/// A named `@keyframes` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframes {
    /// The animation name.
    pub name: String,
    /// The keyframe selectors (`0%`, `100%`, ...) with their declarations.
    pub frames: Vec<StyleRule>,
}

impl Keyframes {
    /// Create an empty keyframes rule.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: vec![],
        }
    }

    /// Add a keyframe.
    pub fn with_frame(mut self, frame: StyleRule) -> Self {
        self.frames.push(frame);
        self
    }

    /// Translate from `0` to `-distance_px` along the x axis.
    pub fn horizontal_scroll(name: impl Into<String>, distance_px: f64) -> Self {
        Self::new(name)
            .with_frame(StyleRule::new("0%").declare("transform", "translateX(0)"))
            .with_frame(
                StyleRule::new("100%").declare("transform", format!("translateX(-{distance_px}px)")),
            )
    }
}

impl fmt::Display for Keyframes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@keyframes {} {{", self.name)?;
        for frame in &self.frames {
            write!(f, " {frame}")?;
        }
        f.write_str(" }")
    }
}

/// Build a pattern matching a whole `@keyframes <name> { ... }` rule,
/// including its nested keyframe blocks.
pub fn keyframes_pattern(name: &str) -> Result<Regex> {
    let pattern = format!(
        r"@keyframes\s+{}\s*\{{(?:[^{{}}]*\{{[^{{}}]*\}})*[^{{}}]*\}}",
        regex::escape(name)
    );
    Regex::new(&pattern).map_err(|source| Error::KeyframesPattern {
        name: name.to_string(),
        source,
    })
}

/// Install `keyframes` into `css`.
///
/// The first existing rule with the same name is replaced in place; when
/// there is none the rule is appended.
pub fn install_keyframes(css: &str, keyframes: &Keyframes) -> Result<String> {
    let pattern = keyframes_pattern(&keyframes.name)?;
    let rule = keyframes.to_string();

    if pattern.is_match(css) {
        tracing::trace!(target: "text_ticker_style::keyframes", name = %keyframes.name, "replacing keyframes");
        Ok(pattern.replacen(css, 1, NoExpand(&rule)).into_owned())
    } else {
        tracing::trace!(target: "text_ticker_style::keyframes", name = %keyframes.name, "appending keyframes");
        Ok(format!("{css}{rule}"))
    }
}
