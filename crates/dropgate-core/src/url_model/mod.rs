//! URL classification for drop sources.
//!
//! Tells relative filesystem paths apart from remote, `data:` and `blob:`
//! URLs. Pure string tests; nothing is fetched or resolved.

mod shape;

use serde::Serialize;

pub use shape::{is_blob_url, is_relative_url};

/// What kind of reference a string is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlShape {
    /// Empty or missing.
    Empty,
    /// Relative path into the filesystem.
    Relative,
    /// `blob:` URL created by the host.
    Blob,
    /// `scheme://...` or protocol-relative `//...`.
    Remote,
    /// `data:` URI.
    Data,
}

/// Classifies `url` with the same string tests as [`is_relative_url`] and
/// [`is_blob_url`].
///
/// Blob is checked first: blob URLs embed an origin (`blob:http://...`) and
/// are reported as `Blob` rather than `Remote`.
pub fn classify_url<'a>(url: impl Into<Option<&'a str>>) -> UrlShape {
    let url = match url.into() {
        Some(u) if !u.is_empty() => u,
        _ => return UrlShape::Empty,
    };
    if is_blob_url(url) {
        UrlShape::Blob
    } else if shape::is_data_url(url) {
        UrlShape::Data
    } else if url.contains("//") {
        UrlShape::Remote
    } else {
        UrlShape::Relative
    }
}

/// Scheme of `url` when it parses as an absolute URL (`https`, `blob`, ...).
pub fn url_scheme(url: &str) -> Option<String> {
    url::Url::parse(url.trim())
        .ok()
        .map(|parsed| parsed.scheme().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes() {
        assert_eq!(classify_url(None), UrlShape::Empty);
        assert_eq!(classify_url(""), UrlShape::Empty);
        assert_eq!(classify_url("images/a.png"), UrlShape::Relative);
        assert_eq!(classify_url("http://x/y"), UrlShape::Remote);
        assert_eq!(classify_url("//cdn/x"), UrlShape::Remote);
        assert_eq!(classify_url("  data:image/png;base64,AAAA"), UrlShape::Data);
        assert_eq!(classify_url("blob:http://localhost/uuid"), UrlShape::Blob);
    }

    #[test]
    fn shape_agrees_with_predicates() {
        for url in [
            "",
            "a/b.css",
            "https://h/p",
            "//h/p",
            "data:,x",
            "blob:http://h/id",
            "style.css?v=1",
        ] {
            let shape = classify_url(url);
            assert_eq!(shape == UrlShape::Relative, is_relative_url(url), "url={url}");
            assert_eq!(shape == UrlShape::Blob, is_blob_url(url), "url={url}");
        }
    }

    #[test]
    fn schemes() {
        assert_eq!(url_scheme("https://example.com/a").as_deref(), Some("https"));
        assert_eq!(url_scheme("blob:http://localhost/uuid").as_deref(), Some("blob"));
        assert_eq!(url_scheme(" data:text/plain,hi").as_deref(), Some("data"));
        assert_eq!(url_scheme("images/a.png"), None);
        assert_eq!(url_scheme("//cdn/x"), None);
    }

    #[test]
    fn shape_serializes_kebab_case() {
        let json = serde_json::to_string(&UrlShape::Relative).unwrap();
        assert_eq!(json, "\"relative\"");
    }
}
