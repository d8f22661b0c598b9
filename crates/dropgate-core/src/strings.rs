//! User-facing message templates and `{N}` placeholder formatting.

use serde::{Deserialize, Serialize};

/// Default "max size exceeded" template; `{0}` is the limit in megabytes.
pub const MAX_SIZE_EXCEEDED: &str = "exceeds the maximum size that can be imported: {0} MB";

/// Default "unsupported file type" message.
pub const UNSUPPORTED_FILE_TYPE: &str =
    "is not a supported file type; only text-based files, images and archives can be imported";

/// Localized templates used by the admission gate (optional `[messages]`
/// section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub max_size_exceeded: String,
    pub unsupported_file_type: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            max_size_exceeded: MAX_SIZE_EXCEEDED.to_string(),
            unsupported_file_type: UNSUPPORTED_FILE_TYPE.to_string(),
        }
    }
}

/// Replaces `{0}`, `{1}`, ... in `template` with the matching entry of `args`.
///
/// Placeholders without a matching argument, and braces that do not enclose a
/// plain index, are copied through unchanged.
pub fn format(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
