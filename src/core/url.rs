//! URL building for site links, asset sources and document targets.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: every path segment is encoded on output, the way
//!   `encodeURIComponent` does it, so ids with spaces or brackets survive.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped inside one path segment.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment.
#[inline]
pub fn encode_component(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Percent-encode every `/`-separated segment, keeping the slashes.
///
/// Empty segments stay empty, so `a//b` keeps its double slash.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.is_empty() {
                String::new()
            } else {
                encode_component(segment)
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Decode percent-encoding, keeping the input when it is not valid UTF-8.
pub fn decode(s: &str) -> Cow<'_, str> {
    percent_decode_str(s)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(s))
}

/// Check if a URL is an absolute `http(s)` URL.
#[inline]
pub fn is_http(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Normalize a site base so it always ends with `/`.
///
/// - `""` -> `/`
/// - `/eng-portfolio` -> `/eng-portfolio/`
pub fn normalize_base(base: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        return "/".to_string();
    }
    let with_leading = if base.starts_with('/') || is_http(base) {
        base.to_string()
    } else {
        format!("/{base}")
    };
    if with_leading.ends_with('/') {
        with_leading
    } else {
        format!("{with_leading}/")
    }
}

/// Link to a rendered page: `{base}{class}/{id}` with encoded segments.
pub fn page_href(base: &str, cls: &str, id: &str) -> String {
    format!("{base}{}/{}", encode_component(cls), encode_path(id))
}

/// Resolve a content path against the site base.
///
/// Absolute `http(s)` URLs pass through untouched; anything else loses its
/// leading slashes and is encoded segment by segment under `base`.
pub fn asset_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if is_http(path) {
        return path.to_string();
    }
    format!("{base}{}", encode_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_matches_uri_component() {
        assert_eq!(encode_component("1.1.9 Soldering"), "1.1.9%20Soldering");
        assert_eq!(encode_component("[W2] Resume"), "%5BW2%5D%20Resume");
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component("it's (ok)!"), "it's%20(ok)!");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_encode_path_keeps_slashes() {
        assert_eq!(encode_path("Notes/W2 Resume.pdf"), "Notes/W2%20Resume.pdf");
        assert_eq!(encode_path("a//b"), "a//b");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("1.1.9%20Soldering"), "1.1.9 Soldering");
        assert_eq!(decode("plain"), "plain");
    }

    #[test]
    fn test_is_http() {
        assert!(is_http("https://example.com/a.png"));
        assert!(is_http("HTTP://EXAMPLE.COM"));
        assert!(!is_http("/images/a.png"));
        assert!(!is_http("ftp://example.com"));
        assert!(!is_http("http"));
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("/eng-portfolio"), "/eng-portfolio/");
        assert_eq!(normalize_base("eng-portfolio/"), "/eng-portfolio/");
    }

    #[test]
    fn test_page_href() {
        assert_eq!(
            page_href("/eng-portfolio/", "DE", "Unit 1/1.1.9 Soldering"),
            "/eng-portfolio/DE/Unit%201/1.1.9%20Soldering"
        );
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url("/site/", "/img/a b.png"), "/site/img/a%20b.png");
        assert_eq!(
            asset_url("/site/", "https://youtu.be/dQw4w9WgXcQ"),
            "https://youtu.be/dQw4w9WgXcQ"
        );
    }
}
