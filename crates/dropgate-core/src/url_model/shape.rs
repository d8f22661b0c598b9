//! Relative-path and blob URL predicates.

/// Tests whether `url` is a relative path into the filesystem.
///
/// Empty or missing input is not relative. Anything containing `//`
/// (`https://host`, protocol-relative `//cdn/x`) or a `data:` URI is not
/// relative either.
pub fn is_relative_url<'a>(url: impl Into<Option<&'a str>>) -> bool {
    match url.into() {
        Some(url) if !url.is_empty() => !(url.contains("//") || is_data_url(url)),
        _ => false,
    }
}

/// Tests for a blob URL, e.g. `blob:http://localhost:8000/bf64f1e0-044d-4673-ba7d-156251db09f8`.
pub fn is_blob_url<'a>(url: impl Into<Option<&'a str>>) -> bool {
    match url.into() {
        Some(url) => url.starts_with("blob:"),
        None => false,
    }
}

pub(super) fn is_data_url(url: &str) -> bool {
    url.contains("data:")
}
