//! Configuration for the shop.
//!
//! Every field has a default, so an empty JSON object is a valid config and a
//! missing config file is never required.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::layout::{LayoutPolicy, DEFAULT_BREAKPOINT_DP, DEFAULT_DP_PER_COLUMN};

/// Main configuration for the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Width in density-independent units at which split layout starts.
    #[serde(default = "default_breakpoint_dp")]
    pub breakpoint_dp: f32,

    /// Density-independent units per terminal column.
    #[serde(default = "default_dp_per_column")]
    pub dp_per_column: f32,

    /// Color palette.
    #[serde(default)]
    pub theme: ThemeName,

    /// Border and marker characters.
    #[serde(default)]
    pub icons: IconPreference,
}

fn default_breakpoint_dp() -> f32 {
    DEFAULT_BREAKPOINT_DP
}

fn default_dp_per_column() -> f32 {
    DEFAULT_DP_PER_COLUMN
}

/// Named color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark palette.
    #[default]
    Mocha,
    /// Light palette.
    Latte,
    /// Maximum contrast.
    HighContrast,
}

/// Preferred character set for borders and markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconPreference {
    #[default]
    Unicode,
    Ascii,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            breakpoint_dp: default_breakpoint_dp(),
            dp_per_column: default_dp_per_column(),
            theme: ThemeName::default(),
            icons: IconPreference::default(),
        }
    }
}

impl ShopConfig {
    /// Load and validate configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Reject values the layout math cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("breakpoint_dp", self.breakpoint_dp)?;
        check_positive("dp_per_column", self.dp_per_column)
    }

    /// Apply `NO_COLOR`: when set, borders fall back to ASCII.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var_os("NO_COLOR").is_some() && self.icons != IconPreference::Ascii {
            warn!("NO_COLOR set, using ASCII borders");
            self.icons = IconPreference::Ascii;
        }
        self
    }

    /// The layout policy this config describes.
    pub fn layout_policy(&self) -> LayoutPolicy {
        LayoutPolicy::new(self.breakpoint_dp)
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A field holds a value that cannot be used.
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
