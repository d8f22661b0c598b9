//! Language registry: maps a normalized extension to a language id.
//!
//! Family predicates (`is_html`, `is_image`, ...) and the admission gate's
//! "known type" check go through [`LanguageRegistry`] so callers can plug in
//! their own editor's language table. [`BuiltinRegistry`] covers the usual
//! web-authoring languages and accepts extra mappings from config.

use std::collections::BTreeMap;

use crate::extension::Extension;

pub const LANG_HTML: &str = "html";
pub const LANG_CSS: &str = "css";
pub const LANG_MARKDOWN: &str = "markdown";
pub const LANG_IMAGE: &str = "image";
pub const LANG_SVG: &str = "svg";

/// Looks up the language id registered for an extension.
pub trait LanguageRegistry: Send + Sync {
    /// Returns the language id for `ext`, or `None` when the extension is
    /// unknown. Implementations typically key on [`Extension::registry_key`].
    fn language_for_extension(&self, ext: &Extension) -> Option<&str>;
}

/// Built-in language table plus optional overrides.
#[derive(Debug, Clone, Default)]
pub struct BuiltinRegistry {
    extra: BTreeMap<String, String>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds extension → language mappings. Keys may be given with or without
    /// the leading dot and in any case; extras take precedence over the
    /// built-in table.
    pub fn with_extra<I, K, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, lang) in extra {
            let key = Extension::new(key.as_ref()).registry_key().to_string();
            if key.is_empty() {
                tracing::warn!("ignoring language mapping with empty extension");
                continue;
            }
            self.extra.insert(key, lang.into());
        }
        self
    }
}

impl LanguageRegistry for BuiltinRegistry {
    fn language_for_extension(&self, ext: &Extension) -> Option<&str> {
        let key = ext.registry_key();
        if let Some(lang) = self.extra.get(key) {
            return Some(lang.as_str());
        }
        builtin_language(key)
    }
}

/// Built-in language id for a registry key (extension without dot).
fn builtin_language(key: &str) -> Option<&'static str> {
    let lang = match key {
        "html" | "htm" | "htx" | "htmls" | "shtm" | "shtml" | "xhtml" => LANG_HTML,
        "css" => LANG_CSS,
        "less" => "less",
        "scss" => "scss",
        "md" | "markdown" | "mdown" | "mkdn" | "mkd" => LANG_MARKDOWN,
        "js" | "mjs" | "jsx" => "javascript",
        "json" => "json",
        "xml" | "wxs" | "wxl" => "xml",
        "svg" => LANG_SVG,
        "gif" | "png" | "jpe" | "jpeg" | "jpg" | "ico" | "bmp" | "webp" => LANG_IMAGE,
        "mp3" | "wav" | "aif" | "aiff" | "ogg" => "audio",
        "txt" | "text" => "text",
        _ => return None,
    };
    Some(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(reg: &BuiltinRegistry, raw: &str) -> Option<String> {
        reg.language_for_extension(&Extension::new(raw))
            .map(str::to_string)
    }

    #[test]
    fn builtin_web_languages() {
        let reg = BuiltinRegistry::new();
        assert_eq!(lookup(&reg, ".html").as_deref(), Some("html"));
        assert_eq!(lookup(&reg, "HTM").as_deref(), Some("html"));
        assert_eq!(lookup(&reg, ".css").as_deref(), Some("css"));
        assert_eq!(lookup(&reg, ".markdown").as_deref(), Some("markdown"));
        assert_eq!(lookup(&reg, ".svg").as_deref(), Some("svg"));
        assert_eq!(lookup(&reg, ".jpg").as_deref(), Some("image"));
    }

    #[test]
    fn unknown_and_empty() {
        let reg = BuiltinRegistry::new();
        assert_eq!(lookup(&reg, ".xyz"), None);
        assert_eq!(lookup(&reg, ""), None);
        assert_eq!(lookup(&reg, "."), None);
    }

    #[test]
    fn extras_normalize_keys_and_override() {
        let reg = BuiltinRegistry::new().with_extra([(".VUE", "html"), ("css", "custom-css")]);
        assert_eq!(lookup(&reg, "vue").as_deref(), Some("html"));
        assert_eq!(lookup(&reg, ".css").as_deref(), Some("custom-css"));
    }

    #[test]
    fn extras_skip_empty_key() {
        let reg = BuiltinRegistry::new().with_extra([("", "text")]);
        assert_eq!(lookup(&reg, ""), None);
    }
}
