//! Extension classification: MIME types and language families.
//!
//! The MIME table and the resizable-image/archive families are fixed and
//! exposed as free functions. Markup, stylesheet and image families come from
//! a [`LanguageRegistry`] and are answered by [`ContentClassifier`].

mod family;
mod mime;

use serde::Serialize;

pub use family::{is_archive, is_resizable_image};
pub use mime::{is_text_type, is_utf8_encoded, mime_from_ext, OCTET_STREAM};

use crate::extension::Extension;
use crate::registry::{LanguageRegistry, LANG_CSS, LANG_HTML, LANG_IMAGE, LANG_MARKDOWN, LANG_SVG};
use crate::sizes::SizeCategory;

/// Answers family questions about extensions using a language registry.
pub struct ContentClassifier<'a, R: ?Sized> {
    registry: &'a R,
}

impl<'a, R: LanguageRegistry + ?Sized> ContentClassifier<'a, R> {
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Language id the registry reports for `ext`, if any.
    pub fn language_id(&self, ext: &str) -> Option<&'a str> {
        self.registry.language_for_extension(&Extension::new(ext))
    }

    fn language_is(&self, ext: &str, ids: &[&str]) -> bool {
        self.language_id(ext).is_some_and(|id| ids.contains(&id))
    }

    /// Raster images and SVG.
    pub fn is_image(&self, ext: &str) -> bool {
        self.language_is(ext, &[LANG_IMAGE, LANG_SVG])
    }

    pub fn is_html(&self, ext: &str) -> bool {
        self.language_is(ext, &[LANG_HTML])
    }

    pub fn is_css(&self, ext: &str) -> bool {
        self.language_is(ext, &[LANG_CSS])
    }

    pub fn is_markdown(&self, ext: &str) -> bool {
        self.language_is(ext, &[LANG_MARKDOWN])
    }

    /// HTML and CSS carry links that must be rewritten when files move.
    pub fn needs_rewriting(&self, ext: &str) -> bool {
        self.is_html(ext) || self.is_css(ext)
    }

    /// Full report for one extension.
    pub fn classify(&self, ext: &str) -> Classification {
        let mime = mime_from_ext(ext);
        Classification {
            extension: Extension::new(ext).to_string(),
            mime: mime.to_string(),
            language: self.language_id(ext).map(str::to_string),
            text: is_text_type(mime),
            image: self.is_image(ext),
            resizable_image: is_resizable_image(ext),
            html: self.is_html(ext),
            css: self.is_css(ext),
            markdown: self.is_markdown(ext),
            needs_rewriting: self.needs_rewriting(ext),
            archive: is_archive(ext),
            size_category: SizeCategory::for_extension(ext),
        }
    }
}

/// Everything the classifier knows about one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub extension: String,
    pub mime: String,
    pub language: Option<String>,
    pub text: bool,
    pub image: bool,
    pub resizable_image: bool,
    pub html: bool,
    pub css: bool,
    pub markdown: bool,
    pub needs_rewriting: bool,
    pub archive: bool,
    pub size_category: SizeCategory,
}
