//! Rejection reasons returned by the admission gate.

use thiserror::Error;

/// Why a file was refused. `Display` is the localized message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The file is larger than the limit for its size category.
    #[error("{message}")]
    SizeExceeded {
        /// The limit in megabytes, as substituted into the message.
        limit_mb: String,
        message: String,
    },
    /// The extension is not registry-known, not text, and not an archive.
    #[error("{message}")]
    UnsupportedType { message: String },
}

impl Rejection {
    pub fn message(&self) -> &str {
        match self {
            Rejection::SizeExceeded { message, .. } | Rejection::UnsupportedType { message } => {
                message
            }
        }
    }

    pub fn is_size_exceeded(&self) -> bool {
        matches!(self, Rejection::SizeExceeded { .. })
    }
}
