use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    /// Prefix of generated column titles ("Column" gives "Column 1", "Column 2", ...)
    pub title_prefix: String,
    /// Distance the pointer must travel from the press origin before a drag starts
    pub activation_distance: f64,
}

impl BoardConfig {
    const DEFAULT_TITLE_PREFIX: &'static str = "Column";
    const DEFAULT_ACTIVATION_DISTANCE: f64 = 3.0;

    /// Parses and validates a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BoardError::ConfigError(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path).await?;
        let config = Self::from_json(&contents)?;
        tracing::debug!("Loaded board config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title_prefix.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "title_prefix must not be empty".to_string(),
            ));
        }
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(BoardError::ConfigError(format!(
                "activation_distance must be a non-negative number, got {}",
                self.activation_distance
            )));
        }
        Ok(())
    }

    /// Title for the column created when the board holds `count` columns
    pub fn column_title(&self, count: usize) -> String {
        format!("{} {}", self.title_prefix, count + 1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            title_prefix: Self::DEFAULT_TITLE_PREFIX.to_string(),
            activation_distance: Self::DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}
