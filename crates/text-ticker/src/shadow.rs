//! The widget's own subtree.
//!
//! The ticker owns a small retained tree: one `<style>` element and a
//! `.ticker-container` holding the `.ticker-content` element. Hosts read it
//! after each callback and mirror it into their document.

use std::fmt;

use crate::escape::escape_html;

/// The inline `animation` of the content element.
#[derive(Debug, Clone, PartialEq)]
pub enum Animation {
    /// No inline animation set.
    Unset,
    /// Explicitly disabled (`animation: none`).
    Disabled,
    /// An infinite linear scroll using a keyframes rule.
    Scroll {
        /// The keyframes name.
        name: String,
        /// Seconds per cycle.
        duration_secs: f64,
    },
}

impl Animation {
    /// Whether the content is scrolling.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Scroll { .. })
    }

    /// Seconds per cycle, if scrolling.
    pub fn duration_secs(&self) -> Option<f64> {
        match self {
            Self::Scroll { duration_secs, .. } => Some(*duration_secs),
            _ => None,
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Disabled => f.write_str("none"),
            Self::Scroll {
                name,
                duration_secs,
            } => write!(f, "{name} {duration_secs}s linear infinite"),
        }
    }
}

/// The `.ticker-content` element.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentElement {
    /// Inner markup.
    pub html: String,
    /// Inline text color.
    pub color: Option<String>,
    /// Inline animation.
    pub animation: Animation,
    /// Whether the inline transform is pinned to `translateX(0)`.
    pub transform_reset: bool,
}

impl ContentElement {
    /// Content holding plain text, with no inline style.
    pub fn with_text(text: &str) -> Self {
        Self {
            html: escape_html(text).into_owned(),
            color: None,
            animation: Animation::Unset,
            transform_reset: false,
        }
    }

    /// The inline `style` attribute value.
    pub fn inline_style(&self) -> String {
        let mut declarations = Vec::new();
        if let Some(color) = &self.color {
            declarations.push(format!("color: {color};"));
        }
        if self.animation != Animation::Unset {
            declarations.push(format!("animation: {};", self.animation));
        }
        if self.transform_reset {
            declarations.push("transform: translateX(0);".to_string());
        }
        declarations.join(" ")
    }
}

/// The ticker's shadow subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowTree {
    /// Text of the `<style>` element.
    pub style: String,
    /// The content element; `None` until the skeleton is rendered.
    pub content: Option<ContentElement>,
}

impl ShadowTree {
    /// Whether the skeleton has been rendered.
    pub fn is_rendered(&self) -> bool {
        self.content.is_some()
    }

    /// Serialize the subtree as markup.
    pub fn to_html(&self) -> String {
        let mut html = format!("<style>{}</style>", self.style);
        if let Some(content) = &self.content {
            let style = content.inline_style();
            let style_attr = if style.is_empty() {
                String::new()
            } else {
                format!(" style=\"{}\"", escape_html(&style))
            };
            html.push_str(&format!(
                "<div class=\"ticker-container\"><div class=\"ticker-content\"{style_attr}>{}</div></div>",
                content.html
            ));
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_css_values() {
        assert_eq!(Animation::Disabled.to_string(), "none");
        assert_eq!(
            Animation::Scroll {
                name: "scroll-dynamic".into(),
                duration_secs: 2.56
            }
            .to_string(),
            "scroll-dynamic 2.56s linear infinite"
        );
    }

    #[test]
    fn loading_skeleton_markup() {
        let tree = ShadowTree {
            style: ":host { display: block; }".into(),
            content: Some(ContentElement::with_text("Loading...")),
        };

        assert_eq!(
            tree.to_html(),
            "<style>:host { display: block; }</style><div class=\"ticker-container\"><div class=\"ticker-content\">Loading...</div></div>"
        );
    }

    #[test]
    fn inline_style_lists_set_properties() {
        let mut content = ContentElement::with_text("x");
        content.color = Some("#333".into());
        content.animation = Animation::Disabled;
        content.transform_reset = true;

        assert_eq!(
            content.inline_style(),
            "color: #333; animation: none; transform: translateX(0);"
        );
    }

    #[test]
    fn message_text_is_escaped() {
        assert_eq!(ContentElement::with_text("a < b").html, "a &lt; b");
    }
}
