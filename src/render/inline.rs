//! Inline text handling: markup escaping and `**bold**` spans.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// Non-greedy, so each pair of markers closes at the nearest `**`
static RE_BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Replaces every `**text**` span with `<strong>text</strong>`.
///
/// Spans do not nest. An unpaired trailing `**` is left as literal text.
pub fn substitute_bold(text: &str) -> Cow<'_, str> {
    RE_BOLD_SPAN.replace_all(text, "<strong>${1}</strong>")
}

/// Escapes characters that are reserved in HTML text and attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }
    Cow::Owned(result)
}

/// Escapes (when asked) and then applies bold substitution.
///
/// Asterisks are not reserved in HTML, so escaping first never disturbs the
/// bold markers.
pub fn render_inline(text: &str, escape: bool) -> String {
    if escape {
        substitute_bold(&escape_html(text)).into_owned()
    } else {
        substitute_bold(text).into_owned()
    }
}
