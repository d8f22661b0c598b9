use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::BuiltinRegistry;
use crate::sizes::SizeLimits;
use crate::strings::Messages;

/// Global configuration loaded from `~/.config/dropgate/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropgateConfig {
    /// Import size limits in bytes; missing fields use built-in defaults.
    #[serde(default)]
    pub limits: SizeLimits,
    /// Message templates for rejections; `{0}` is the limit in MB.
    #[serde(default)]
    pub messages: Messages,
    /// Extra extension → language id mappings (e.g. `vue = "html"`).
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

impl DropgateConfig {
    /// Language registry with the configured extra mappings applied.
    pub fn registry(&self) -> BuiltinRegistry {
        BuiltinRegistry::new().with_extra(&self.languages)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.limits.bytes_per_mb > 0, "limits.bytes_per_mb must be > 0");
        ensure!(
            self.messages.max_size_exceeded.contains("{0}"),
            "messages.max_size_exceeded must contain the {{0}} placeholder"
        );
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dropgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DropgateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DropgateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<DropgateConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DropgateConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
