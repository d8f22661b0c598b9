//! Registry-independent extension families.

use crate::extension::Extension;

/// Images the host can downscale before import.
pub fn is_resizable_image(ext: &str) -> bool {
    matches!(Extension::new(ext).as_str(), ".png" | ".jpg" | ".jpeg")
}

/// Archives the host can unpack into the workspace.
pub fn is_archive(ext: &str) -> bool {
    matches!(Extension::new(ext).as_str(), ".zip" | ".tar")
}
