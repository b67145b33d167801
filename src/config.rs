//! Configuration handling for the TUI

use crate::form::FormSchema;
use crate::theme::Theme;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Colour theme
    pub theme: Option<Theme>,
    /// JSON form schema to use instead of the built-in registration form
    pub schema_path: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "cafe-onboard", "cafe-onboard")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    /// Form schema from `schema_path`, or the built-in registration form
    pub fn load_schema(&self) -> Result<FormSchema> {
        match &self.schema_path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read schema {}", path.display()))?;
                let schema = FormSchema::from_json(&content)
                    .with_context(|| format!("Invalid schema {}", path.display()))?;
                tracing::info!("Using form schema from {}", path.display());
                Ok(schema)
            }
            None => Ok(FormSchema::cafe_registration()?),
        }
    }
}
