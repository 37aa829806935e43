//! Capabilities the ticker needs from its host runtime.
//!
//! The widget never touches a document directly. Whatever has a layout
//! engine (a browser binding, a native toolkit, a terminal) implements
//! [`TickerHost`] and pumps the widget's callbacks.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::TickerConfig;
use crate::render::LINE_HEIGHT;

/// An off-screen element to measure.
///
/// The host lays out [`html`](Self::html) hidden, fixed in place and without
/// wrapping, with the given font settings, and reports its width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureProbe {
    /// One cycle of item markup plus a trailing separator.
    pub html: String,
    /// The same cycle as plain text.
    pub text: String,
    /// Resolved font stack.
    pub font_family: String,
    /// Font weight.
    pub font_weight: String,
    /// Font size.
    pub font_size: String,
    /// Line height.
    pub line_height: String,
}

impl MeasureProbe {
    /// Build a probe using the visible content's font settings.
    pub fn new(html: String, text: String, config: &TickerConfig) -> Self {
        Self {
            html,
            text,
            font_family: config.font_stack(),
            font_weight: config.font_weight.clone(),
            font_size: config.font_size.clone(),
            line_height: LINE_HEIGHT.to_string(),
        }
    }

    /// Inline style for the probe element.
    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; visibility: hidden; white-space: nowrap; font-family: {}; font-weight: {}; font-size: {}; line-height: {};",
            self.font_family, self.font_weight, self.font_size, self.line_height
        )
    }
}

/// Services a host provides to the ticker.
pub trait TickerHost {
    /// Lay out `probe` off-screen and return its rendered width in pixels.
    ///
    /// Return `0.0` when nothing could be laid out yet.
    fn measure_width(&mut self, probe: &MeasureProbe) -> f64;

    /// Whether the document head already links a stylesheet whose href
    /// contains `href_fragment`.
    fn head_has_stylesheet(&self, href_fragment: &str) -> bool;

    /// Append a stylesheet link to the document head.
    fn append_stylesheet(&mut self, href: &str);

    /// Start delivering container size changes to `TickerWidget::on_resize`.
    fn observe_resize(&mut self);

    /// Stop delivering container size changes.
    fn unobserve_resize(&mut self);
}

/// A host without a layout engine.
///
/// Every grapheme of the probe text is assumed to advance by the same
/// width, which suits terminals and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessHost {
    /// Width of one grapheme in pixels.
    pub advance_px: f64,
    /// Stylesheet links in the document head.
    pub stylesheets: Vec<String>,
    /// Whether resize observation is active.
    pub observing_resize: bool,
}

impl HeadlessHost {
    /// Create a host with the given per-grapheme advance.
    pub fn new(advance_px: f64) -> Self {
        Self {
            advance_px,
            stylesheets: Vec::new(),
            observing_resize: false,
        }
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(8.0)
    }
}

impl TickerHost for HeadlessHost {
    fn measure_width(&mut self, probe: &MeasureProbe) -> f64 {
        probe.text.graphemes(true).count() as f64 * self.advance_px
    }

    fn head_has_stylesheet(&self, href_fragment: &str) -> bool {
        self.stylesheets.iter().any(|href| href.contains(href_fragment))
    }

    fn append_stylesheet(&mut self, href: &str) {
        self.stylesheets.push(href.to_string());
    }

    fn observe_resize(&mut self) {
        self.observing_resize = true;
    }

    fn unobserve_resize(&mut self) {
        self.observing_resize = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeMap;
    use crate::config::TickerDefaults;

    fn probe(text: &str) -> MeasureProbe {
        let config = TickerConfig::resolve(&AttributeMap::new(), &TickerDefaults::default());
        MeasureProbe::new(String::new(), text.to_string(), &config)
    }

    #[test]
    fn headless_width_counts_graphemes() {
        let mut host = HeadlessHost::new(10.0);

        assert_eq!(host.measure_width(&probe("A|B|")), 40.0);
        assert_eq!(host.measure_width(&probe("e\u{301}|")), 20.0);
        assert_eq!(host.measure_width(&probe("")), 0.0);
    }

    #[test]
    fn probe_css_uses_content_font() {
        let css = probe("x").css_text();

        assert!(css.starts_with("position: fixed; visibility: hidden; white-space: nowrap;"));
        assert!(css.contains("font-family: Arial, sans-serif;"));
        assert!(css.contains("font-size: 14px;"));
        assert!(css.ends_with("line-height: 1.4;"));
    }

    #[test]
    fn headless_head_lookup_is_substring() {
        let mut host = HeadlessHost::default();
        host.append_stylesheet("https://fonts.test/css2?family=Open+Sans:wght@400");

        assert!(host.head_has_stylesheet("Open+Sans"));
        assert!(!host.head_has_stylesheet("Roboto"));
    }
}
