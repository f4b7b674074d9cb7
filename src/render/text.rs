//! Minimal rich text for synopsis, design brief and notes bodies.
//!
//! Order matters: escape first so content can never inject markup, then
//! optional `<br>`, then autolinks, then `**bold**` and `*italic*`.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::html::escape;

static AUTOLINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(https?://[^\s)<]+)").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

pub fn rich_text(text: &str, line_breaks: bool) -> String {
    let mut html = escape(text).into_owned();
    if line_breaks {
        html = html.replace("\r\n", "\n").replace('\n', "<br>");
    }
    let html = AUTOLINK.replace_all(&html, r#"<a href="$1" class="btn">$1</a>"#);
    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    ITALIC.replace_all(&html, "<em>$1</em>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_before_markup() {
        assert_eq!(
            rich_text("<b>**bold**</b> and *it*", false),
            "&lt;b&gt;<strong>bold</strong>&lt;/b&gt; and <em>it</em>"
        );
    }

    #[test]
    fn test_autolink() {
        assert_eq!(
            rich_text("see https://example.com/a?b=1 (docs)", false),
            r#"see <a href="https://example.com/a?b=1" class="btn">https://example.com/a?b=1</a> (docs)"#
        );
    }

    #[test]
    fn test_line_breaks_before_autolink() {
        assert_eq!(
            rich_text("http://a.io\nnext", true),
            r#"<a href="http://a.io" class="btn">http://a.io</a><br>next"#
        );
        assert_eq!(rich_text("a\nb", false), "a\nb");
    }

    #[test]
    fn test_unmatched_markers() {
        assert_eq!(rich_text("2 * 3 = 6", false), "2 * 3 = 6");
    }
}
