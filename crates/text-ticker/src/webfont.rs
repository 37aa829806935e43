//! Webfont stylesheet injection.

use text_ticker_core::logging::targets;

use crate::config::{TickerConfig, TickerDefaults};
use crate::host::TickerHost;

/// The family as it appears in the stylesheet url (`Open Sans` is
/// `Open+Sans`).
pub fn family_key(family: &str) -> String {
    family.replace(' ', "+")
}

/// Stylesheet url for `family` at `weight`.
pub fn webfont_href(base_url: &str, family: &str, weight: &str) -> String {
    format!(
        "{base_url}?family={}:wght@{weight}&display=swap",
        family_key(family)
    )
}

/// Make sure the document head links the configured webfont.
///
/// Does nothing when no webfont is configured or when a stylesheet for the
/// same family is already linked. Returns the href that was appended.
pub fn ensure_webfont(
    host: &mut dyn TickerHost,
    config: &TickerConfig,
    defaults: &TickerDefaults,
) -> Option<String> {
    let family = config.google_font.as_deref()?;
    let key = family_key(family);
    if host.head_has_stylesheet(&key) {
        tracing::trace!(target: targets::WIDGET, family, "webfont already linked");
        return None;
    }

    let href = webfont_href(&defaults.webfont_base_url, family, &config.font_weight);
    host.append_stylesheet(&href);
    tracing::debug!(target: targets::WIDGET, %href, "linked webfont");
    Some(href)
}
