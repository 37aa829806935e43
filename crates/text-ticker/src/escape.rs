//! HTML escaping for text inserted into markup.

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` so `input` is safe in element content
/// and in double- or single-quoted attribute values.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("Breaking news"), Cow::Borrowed(_)));
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
