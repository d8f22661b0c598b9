//! Import admission: decide whether a dropped file may enter the workspace.
//!
//! The gate derives the extension from the file name, picks the size limit
//! for its category (resizable image, archive, regular) and rejects files
//! over that limit first. Files within the limit are accepted when the
//! language registry knows the extension, the MIME type is text, or the file
//! is an archive.

mod error;

pub use error::Rejection;

use crate::content::{is_archive, is_text_type, mime_from_ext};
use crate::extension::{extname, Extension};
use crate::registry::LanguageRegistry;
use crate::sizes::{SizeCategory, SizeLimits};
use crate::strings::{self, Messages};

/// Size and type checks for file imports.
pub struct AdmissionGate<'a, R: ?Sized> {
    registry: &'a R,
    limits: SizeLimits,
    messages: Messages,
}

impl<'a, R: LanguageRegistry + ?Sized> AdmissionGate<'a, R> {
    /// Gate with default limits and messages.
    pub fn new(registry: &'a R) -> Self {
        Self {
            registry,
            limits: SizeLimits::default(),
            messages: Messages::default(),
        }
    }

    pub fn with_limits(mut self, limits: SizeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    /// Size category for `filename`, based on its extension.
    pub fn size_category(&self, filename: &str) -> SizeCategory {
        SizeCategory::for_extension(extname(filename))
    }

    /// Byte limit that applies to `filename`.
    pub fn limit_for(&self, filename: &str) -> u64 {
        self.limits.limit_for(self.size_category(filename))
    }

    /// Returns `Ok(())` if a file named `filename` of `size` bytes may be
    /// imported. Size is checked before type, so at most one reason is given.
    pub fn should_reject_file(&self, filename: &str, size: u64) -> Result<(), Rejection> {
        let ext = extname(filename);
        let mime = mime_from_ext(ext);
        let archive = is_archive(ext);

        let limit = self.limits.limit_for(SizeCategory::for_extension(ext));
        if size > limit {
            let limit_mb = self.limits.to_megabytes(limit);
            let message = strings::format(&self.messages.max_size_exceeded, &[limit_mb.as_str()]);
            tracing::debug!(filename, size, limit, "rejecting file: too large");
            return Err(Rejection::SizeExceeded { limit_mb, message });
        }

        let known = self
            .registry
            .language_for_extension(&Extension::new(ext))
            .is_some();
        if known || is_text_type(mime) || archive {
            tracing::debug!(filename, size, mime, "accepting file");
            return Ok(());
        }

        tracing::debug!(filename, mime, "rejecting file: unsupported type");
        Err(Rejection::UnsupportedType {
            message: self.messages.unsupported_file_type.clone(),
        })
    }
}
