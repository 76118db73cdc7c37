use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SecretViewError};

/// Project-level configuration, loaded from `.secretview.toml`.
///
/// Every field has a default so secretview works without any config
/// file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Pretty-print JSON output (default: true).
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,

    /// Never emit a payload from `detail`, even for full secrets.
    #[serde(default)]
    pub redact_content: bool,

    /// Tracing filter used when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_pretty_json() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            pretty_json: default_pretty_json(),
            redact_content: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for.
    const FILE_NAME: &'static str = ".secretview.toml";

    /// Load settings from `<config_dir>/.secretview.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SecretViewError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Serialize `value` as JSON, honouring `pretty_json`.
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = if self.pretty_json {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| SecretViewError::SerializationError(e.to_string()))
    }
}

// ── Tests ────────────────────────────────────────────────────────────
