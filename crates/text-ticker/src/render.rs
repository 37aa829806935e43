//! Markup and stylesheet generation.
//!
//! The visible content is the joined item list repeated three times so the
//! strip is long enough to loop without a visible gap:
//!
//! ```text
//! A|B  |  A|B  |  A|B
//! ```
//!
//! The measured cycle is the joined list plus one trailing separator, which
//! is exactly the distance the animation translates before wrapping.

use text_ticker_style::prelude::*;
use text_ticker_core::logging::targets;

use crate::config::TickerConfig;
use crate::escape::escape_html;
use crate::items::{ItemList, TickerItem};

/// How many copies of the item sequence the visible content holds.
pub const CONTENT_REPEATS: usize = 3;

/// Viewport width below which the compact layout applies.
pub const NARROW_BREAKPOINT: &str = "(max-width: 768px)";

/// Media query for users who asked for reduced motion.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Font size factor in the compact layout.
pub const NARROW_FONT_SCALE: f64 = 0.9;

/// Line height shared by the visible content and the measurement probe.
pub const LINE_HEIGHT: &str = "1.4";

/// Whether a link target gets the new-context attributes.
///
/// Only web and mail links do; other schemes render as plain links.
pub fn opens_in_new_context(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("mailto:")
}

/// Render a single item.
pub fn render_item(item: &TickerItem) -> String {
    let text = escape_html(item.text());
    match item.url() {
        Some(url) => {
            let url = escape_html(url);
            let link_attributes = if opens_in_new_context(&url) {
                "target=\"_blank\" rel=\"noopener\""
            } else {
                ""
            };
            format!("<a href=\"{url}\" class=\"ticker-item ticker-link\" {link_attributes}>{text}</a>")
        }
        None => format!("<span class=\"ticker-item\">{text}</span>"),
    }
}

/// Render a separator.
pub fn render_separator(separator: &str) -> String {
    format!("<span class=\"separator\">{}</span>", escape_html(separator))
}

/// Render the items joined by separators, without a trailing separator.
pub fn render_items(items: &ItemList, separator: &str) -> String {
    let separator = render_separator(separator);
    items
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Render one measurement cycle: the joined items plus a trailing separator.
pub fn render_cycle(items: &ItemList, separator: &str) -> String {
    format!("{}{}", render_items(items, separator), render_separator(separator))
}

/// Plain text of one cycle, as it reads on screen.
pub fn cycle_text(items: &ItemList, separator: &str) -> String {
    let mut text = items
        .iter()
        .map(TickerItem::text)
        .collect::<Vec<_>>()
        .join(separator);
    text.push_str(separator);
    text
}

/// Render the visible content: [`CONTENT_REPEATS`] copies of the joined
/// items, separated by separators.
pub fn render_content(items: &ItemList, separator: &str) -> String {
    let sequence = render_items(items, separator);
    vec![sequence; CONTENT_REPEATS].join(render_separator(separator).as_str())
}

/// Build the shadow stylesheet for `config`.
pub fn ticker_stylesheet(config: &TickerConfig) -> StyleSheet {
    let mut sheet = StyleSheet::new();

    sheet.add_rule(
        StyleRule::new(":host")
            .declare("display", "block")
            .declare("width", "100%")
            .declare("overflow", "hidden")
            .declare("background-color", &config.background_color)
            .declare("padding", "12px 0")
            .declare("box-sizing", "border-box"),
    );
    sheet.add_rule(
        StyleRule::new(".ticker-container")
            .declare("white-space", "nowrap")
            .declare("overflow", "hidden")
            .declare("position", "relative")
            .declare("min-height", "1.6em")
            .declare("height", "auto")
            .declare("display", "flex")
            .declare("align-items", "center"),
    );
    sheet.add_rule(
        StyleRule::new(".ticker-content")
            .declare("display", "inline-block")
            .declare("font-family", config.font_stack())
            .declare("font-weight", &config.font_weight)
            .declare("font-size", &config.font_size)
            .declare("line-height", LINE_HEIGHT)
            .declare("color", &config.text_color)
            .declare("will-change", "transform")
            .declare("white-space", "nowrap")
            .declare("transform", "translateX(0)"),
    );
    sheet.add_rule(
        StyleRule::new(".ticker-container:hover .ticker-content")
            .declare_important("animation-play-state", "paused"),
    );
    sheet.add_rule(
        StyleRule::new(".ticker-item")
            .declare("color", &config.text_color)
            .declare("padding", "0 5px")
            .declare("transition", "all 0.2s ease"),
    );
    sheet.add_rule(
        StyleRule::new(".ticker-item:hover")
            .declare("filter", "brightness(1.1)")
            .declare("background-color", "rgba(0, 0, 0, 0.05)"),
    );
    sheet.add_rule(
        StyleRule::new(".ticker-link")
            .declare("text-decoration", "none")
            .declare("color", "inherit")
            .declare("cursor", "pointer"),
    );
    sheet.add_rule(
        StyleRule::new(".ticker-link:hover")
            .declare("filter", "brightness(1.2)")
            .declare("background-color", "rgba(0, 0, 0, 0.1)")
            .declare("text-decoration", "underline"),
    );
    sheet.add_rule(
        StyleRule::new(".separator")
            .declare("color", &config.text_color)
            .declare("opacity", "0.7")
            .declare("font-weight", "bold")
            .declare("margin", "0 2em"),
    );

    let mut narrow = MediaBlock::new(NARROW_BREAKPOINT)
        .with_rule(StyleRule::new(":host").declare("padding", "8px 0"));
    match LengthValue::parse("font-size", &config.font_size) {
        Ok(size) => {
            narrow = narrow.with_rule(
                StyleRule::new(".ticker-content")
                    .declare("font-size", size.scaled(NARROW_FONT_SCALE).to_string()),
            );
        }
        Err(err) => {
            tracing::debug!(target: targets::WIDGET, %err, "no compact font size");
        }
    }
    sheet.add_media(narrow.with_rule(StyleRule::new(".separator").declare("margin", "0 1.5em")));

    sheet.add_media(
        MediaBlock::new(REDUCED_MOTION_QUERY).with_rule(
            StyleRule::new(".ticker-content")
                .declare_important("animation", "none")
                .declare_important("transform", "translateX(0)"),
        ),
    );

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeMap;
    use crate::config::TickerDefaults;
    use crate::items::parse_items;

    fn items(json: &str) -> ItemList {
        parse_items(Some(json)).unwrap()
    }

    fn config(attrs: &[(&str, &str)]) -> TickerConfig {
        let attrs: AttributeMap = attrs.iter().copied().collect();
        TickerConfig::resolve(&attrs, &TickerDefaults::default())
    }

    #[test]
    fn plain_item_is_a_span() {
        assert_eq!(
            render_item(&TickerItem::Text("A".into())),
            "<span class=\"ticker-item\">A</span>"
        );
    }

    #[test]
    fn web_and_mail_links_open_in_new_context() {
        for url in ["http://a.test", "https://a.test", "mailto:me@a.test"] {
            let html = render_item(&TickerItem::Structured {
                text: "A".into(),
                url: Some(url.into()),
            });
            assert_eq!(
                html,
                format!("<a href=\"{url}\" class=\"ticker-item ticker-link\" target=\"_blank\" rel=\"noopener\">A</a>")
            );
        }
    }

    #[test]
    fn other_schemes_render_as_plain_links() {
        let html = render_item(&TickerItem::Structured {
            text: "A".into(),
            url: Some("javascript:alert(1)".into()),
        });

        assert_eq!(
            html,
            "<a href=\"javascript:alert(1)\" class=\"ticker-item ticker-link\" >A</a>"
        );
        assert!(!html.contains("noopener"));
    }

    #[test]
    fn cycle_and_content_shapes() {
        let list = items(r#"["A", "B"]"#);
        let sep = render_separator("|");
        let a = "<span class=\"ticker-item\">A</span>";
        let b = "<span class=\"ticker-item\">B</span>";

        assert_eq!(render_cycle(&list, "|"), format!("{a}{sep}{b}{sep}"));
        assert_eq!(cycle_text(&list, "|"), "A|B|");
        assert_eq!(
            render_content(&list, "|"),
            format!("{a}{sep}{b}{sep}{a}{sep}{b}{sep}{a}{sep}{b}")
        );
    }

    #[test]
    fn item_count_per_cycle_matches_valid_items() {
        let list = items(r#"["one", "", {"text": "two", "url": "https://x.test"}, 4, {"text": "three"}]"#);
        let cycle = render_cycle(&list, "|");

        assert_eq!(list.len(), 3);
        assert_eq!(cycle.matches("ticker-item").count(), 3);
        assert_eq!(render_content(&list, "|").matches("ticker-item").count(), 9);
    }

    #[test]
    fn item_and_separator_text_is_escaped() {
        let list = items(r#"["<b>&\"'</b>", {"text": "x", "url": "https://a.test/?a=1&b=\"2\""}]"#);
        let cycle = render_cycle(&list, "<>");

        assert!(cycle.contains("&lt;b&gt;&amp;&quot;&#039;&lt;/b&gt;"));
        assert!(cycle.contains("href=\"https://a.test/?a=1&amp;b=&quot;2&quot;\""));
        assert!(cycle.contains("<span class=\"separator\">&lt;&gt;</span>"));
        assert!(!cycle.contains("<b>"));
    }

    #[test]
    fn stylesheet_reflects_config() {
        let sheet = ticker_stylesheet(&config(&[
            ("background-color", "navy"),
            ("text-color", "white"),
            ("google-font", "Roboto Mono"),
            ("font-weight", "700"),
        ]));

        assert_eq!(sheet.rule(":host").and_then(|r| r.value_of("background-color")), Some("navy"));
        let content = sheet.rule(".ticker-content").unwrap();
        assert_eq!(content.value_of("font-family"), Some("\"Roboto Mono\", Arial, sans-serif"));
        assert_eq!(content.value_of("font-weight"), Some("700"));
        assert_eq!(content.value_of("color"), Some("white"));
        assert_eq!(sheet.rule(".separator").and_then(|r| r.value_of("color")), Some("white"));
    }

    #[test]
    fn stylesheet_has_hover_pause_and_reduced_motion() {
        let css = ticker_stylesheet(&config(&[])).to_css();

        assert!(css.contains(
            ".ticker-container:hover .ticker-content { animation-play-state: paused !important; }"
        ));
        assert!(css.contains(
            "@media (prefers-reduced-motion: reduce) { .ticker-content { animation: none !important; transform: translateX(0) !important; } }"
        ));
    }

    #[test]
    fn narrow_layout_scales_font_size() {
        let sheet = ticker_stylesheet(&config(&[("font-size", "20px")]));
        let narrow = sheet.media(NARROW_BREAKPOINT).unwrap();
        let content = narrow.rules.iter().find(|r| r.selector == ".ticker-content").unwrap();

        assert_eq!(content.value_of("font-size"), Some("18px"));

        let default_sheet = ticker_stylesheet(&config(&[]));
        let default_narrow = default_sheet.media(NARROW_BREAKPOINT).unwrap();
        assert_eq!(default_narrow.rules[1].value_of("font-size"), Some("12.6px"));
    }

    #[test]
    fn keyword_font_size_skips_narrow_override() {
        let sheet = ticker_stylesheet(&config(&[("font-size", "large")]));
        let narrow = sheet.media(NARROW_BREAKPOINT).unwrap();

        assert!(narrow.rules.iter().all(|r| r.selector != ".ticker-content"));
        assert_eq!(narrow.rules.len(), 2);
    }
}
