//! Extension normalization and path extension extraction.
//!
//! Every classifier in this crate compares extensions in one canonical form:
//! lower-case with a leading `.`. The language registry is keyed by the same
//! string without the dot (see [`Extension::registry_key`]).

use std::fmt;

/// A normalized file extension such as `.png`.
///
/// The empty extension stands for "no extension" and classifies as unknown
/// everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// Normalizes a raw extension: lower-cases it and adds the leading `.`
    /// when missing. Normalizing an already normalized value is a no-op.
    pub fn new(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        let lower = raw.to_lowercase();
        if lower.starts_with('.') {
            Self(lower)
        } else {
            Self(format!(".{lower}"))
        }
    }

    /// Extension of the final component of `path` (see [`extname`]).
    pub fn from_path(path: &str) -> Self {
        Self::new(extname(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The extension without its leading dot, as used for registry lookups.
    pub fn registry_key(&self) -> &str {
        self.0.strip_prefix('.').unwrap_or(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Extension {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Extension {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Normalizes `raw` to its canonical string form.
///
/// With `language_aware` set, the result is the registry key form (no leading
/// dot) expected by [`crate::registry::LanguageRegistry`] implementations.
pub fn normalize_extension(raw: &str, language_aware: bool) -> String {
    let ext = Extension::new(raw);
    if language_aware {
        ext.registry_key().to_string()
    } else {
        ext.0
    }
}

/// Returns the extension of the last component of `path`, including the dot.
///
/// - `"a/b/file.txt"` → `".txt"`
/// - `"archive.tar.gz"` → `".gz"`
/// - `".bashrc"`, `"Makefile"`, `".."` → `""`
/// - `"file."` → `"."`
///
/// Both `/` and `\` separate components; trailing separators are ignored.
pub fn extname(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    let base = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
    if base == ".." {
        return "";
    }
    match base.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &base[idx..],
    }
}
