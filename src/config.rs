//! Persisted user settings.

use crate::error::Result;
use crate::highlight::HighlightStyle;
use crate::search::SearchMode;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the config inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Settings that survive between sessions.
///
/// Unknown keys are rejected, and so are values outside an enum's allowed set;
/// a broken config file is reported instead of silently replaced by defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Whether matches are highlighted in results
    pub highlight: bool,
    /// How multi-term queries combine
    pub search_mode: SearchMode,
    /// Colors used for highlighted regions
    pub highlight_mode: HighlightStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight: true,
            search_mode: SearchMode::And,
            highlight_mode: HighlightStyle::Default,
        }
    }
}

impl Config {
    /// Load settings from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        tracing::debug!(?config, "Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let content = toml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(crate::APP_NAME).join(CONFIG_FILE))
}
