//! Byte thresholds for imports and resized images.

use serde::{Deserialize, Serialize};

use crate::content::{is_archive, is_resizable_image};

pub const KB: u64 = 1024;
pub const MB: u64 = 1024 * KB;

/// Which limit applies to a file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCategory {
    ResizableImage,
    Archive,
    Regular,
}

impl SizeCategory {
    /// Resizable images win over archives; everything else is regular.
    pub fn for_extension(ext: &str) -> Self {
        if is_resizable_image(ext) {
            SizeCategory::ResizableImage
        } else if is_archive(ext) {
            SizeCategory::Archive
        } else {
            SizeCategory::Regular
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::ResizableImage => "resizable-image",
            SizeCategory::Archive => "archive",
            SizeCategory::Regular => "regular",
        }
    }
}

/// Size limits in bytes (optional `[limits]` section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    /// Maximum import size for PNG/JPEG files (they are downscaled afterwards).
    pub resizable_image: u64,
    /// Maximum import size for `.zip`/`.tar` archives.
    pub archive: u64,
    /// Maximum import size for every other file.
    pub regular_file: u64,
    /// Upper bound for image data after resizing.
    pub resized_image_target: u64,
    /// Bytes per megabyte, used when rendering limits in messages.
    pub bytes_per_mb: u64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            resizable_image: 10 * MB,
            archive: 20 * MB,
            regular_file: 5 * MB,
            resized_image_target: 250 * KB,
            bytes_per_mb: MB,
        }
    }
}

impl SizeLimits {
    pub fn limit_for(&self, category: SizeCategory) -> u64 {
        match category {
            SizeCategory::ResizableImage => self.resizable_image,
            SizeCategory::Archive => self.archive,
            SizeCategory::Regular => self.regular_file,
        }
    }

    /// Renders a byte limit in megabytes as a plain decimal (`10`, `2.5`).
    pub fn to_megabytes(&self, bytes: u64) -> String {
        let mb = bytes as f64 / self.bytes_per_mb.max(1) as f64;
        format!("{mb}")
    }

    /// Whether resized image data is still over the target size.
    pub fn is_image_too_large(&self, byte_length: u64) -> bool {
        byte_length > self.resized_image_target
    }
}

/// [`SizeLimits::is_image_too_large`] with the default limits.
pub fn is_image_too_large(byte_length: u64) -> bool {
    SizeLimits::default().is_image_too_large(byte_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_extension() {
        assert_eq!(SizeCategory::for_extension(".png"), SizeCategory::ResizableImage);
        assert_eq!(SizeCategory::for_extension("JPEG"), SizeCategory::ResizableImage);
        assert_eq!(SizeCategory::for_extension(".zip"), SizeCategory::Archive);
        assert_eq!(SizeCategory::for_extension(".tar"), SizeCategory::Archive);
        assert_eq!(SizeCategory::for_extension(".gif"), SizeCategory::Regular);
        assert_eq!(SizeCategory::for_extension(""), SizeCategory::Regular);
        assert_eq!(SizeCategory::ResizableImage.as_str(), "resizable-image");
    }

    #[test]
    fn default_limits() {
        let limits = SizeLimits::default();
        assert_eq!(limits.limit_for(SizeCategory::ResizableImage), 10 * MB);
        assert_eq!(limits.limit_for(SizeCategory::Archive), 20 * MB);
        assert_eq!(limits.limit_for(SizeCategory::Regular), 5 * MB);
        assert!(limits.archive > limits.regular_file);
    }

    #[test]
    fn megabytes_render_plain() {
        let limits = SizeLimits::default();
        assert_eq!(limits.to_megabytes(10 * MB), "10");
        assert_eq!(limits.to_megabytes(5 * MB / 2), "2.5");
        assert_eq!(limits.to_megabytes(0), "0");
    }

    #[test]
    fn megabytes_with_zero_divisor() {
        let limits = SizeLimits {
            bytes_per_mb: 0,
            ..SizeLimits::default()
        };
        assert_eq!(limits.to_megabytes(7), "7");
    }

    #[test]
    fn image_too_large_is_strict() {
        let target = SizeLimits::default().resized_image_target;
        assert_eq!(target, 250 * KB);
        assert!(!is_image_too_large(target));
        assert!(!is_image_too_large(0));
        assert!(is_image_too_large(target + 1));
    }

    #[test]
    fn image_too_large_custom_target() {
        let limits = SizeLimits {
            resized_image_target: 100,
            ..SizeLimits::default()
        };
        assert!(limits.is_image_too_large(101));
        assert!(!limits.is_image_too_large(100));
    }
}
