//! Extension → MIME type table.

use crate::extension::Extension;

/// Fallback for extensions the table does not know.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Maps an extension (any case, dot optional) to its MIME type.
///
/// Markdown maps to `text/html` because the host renders it as HTML. Media
/// extensions that can be audio or video (`.ogg`, `.mpeg`) prefer video.
pub fn mime_from_ext(ext: &str) -> &'static str {
    match Extension::new(ext).as_str() {
        ".html" | ".htmls" | ".htm" | ".htx" | ".md" | ".markdown" => "text/html",
        ".css" => "text/css",
        ".js" => "text/javascript",
        ".txt" => "text/plain",
        ".svg" => "image/svg+xml",
        ".png" => "image/png",
        ".ico" => "image/x-icon",
        ".bmp" => "image/bmp",
        ".jpg" | ".jpe" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".mp4" => "video/mp4",
        ".mpeg" => "video/mpeg",
        ".ogg" | ".ogv" => "video/ogg",
        ".mov" | ".qt" => "video/quicktime",
        ".webm" => "video/webm",
        ".avi" | ".divx" => "video/avi",
        ".mpa" | ".mp3" => "audio/mpeg",
        ".wav" => "audio/vnd.wave",
        // Web fonts
        ".eot" => "application/vnd.ms-fontobject",
        ".otf" => "application/x-font-opentype",
        ".ttf" => "application/x-font-ttf",
        ".woff" => "application/font-woff",
        _ => OCTET_STREAM,
    }
}

/// Whether `mime` is a `text/*` type.
pub fn is_text_type(mime: &str) -> bool {
    mime.starts_with("text")
}

/// Whether files with this extension can be read as UTF-8 text.
pub fn is_utf8_encoded(ext: &str) -> bool {
    is_text_type(mime_from_ext(ext))
}
