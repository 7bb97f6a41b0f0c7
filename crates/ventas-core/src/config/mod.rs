mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::VentasError;
use defaults::*;

/// Top-level ventas configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ventas: GeneralConfig,
    #[serde(default)]
    pub intent: IntentConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Site-specific additions to the bundled intent dictionaries.
///
/// Entries are normalized before use, so accents and casing don't matter.
/// Extra short words are fuzzy-match targets and also count as phrases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentConfig {
    #[serde(default)]
    pub extra_phrases: Vec<String>,
    #[serde(default)]
    pub extra_negations: Vec<String>,
    #[serde(default)]
    pub extra_short_words: Vec<String>,
}

impl IntentConfig {
    /// True when nothing is added on top of the bundled dictionaries.
    pub fn is_empty(&self) -> bool {
        self.extra_phrases.is_empty()
            && self.extra_negations.is_empty()
            && self.extra_short_words.is_empty()
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, VentasError> {
    let expanded = shellexpand(path);
    let path = Path::new(&expanded);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| VentasError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| VentasError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
