//! Configuration handling for the submission toolkit

use crate::pipeline::NoFilePolicy;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Host configuration for the submission pipeline
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PipelineConfig {
    /// Base URL prepended to relative request paths
    pub api_base_url: Option<String>,
    /// User agent reported by the HTTP client
    pub user_agent: Option<String>,
    /// Abort silently instead of showing an error when a required file is missing
    pub silent_abort_on_missing_file: Option<bool>,
}

impl PipelineConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formgate", "formgate")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PipelineConfig = serde_json::from_str(&content)?;
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

    /// Default policy applied when a required file is missing
    pub fn no_file_policy(&self) -> NoFilePolicy {
        if self.silent_abort_on_missing_file.unwrap_or(false) {
            NoFilePolicy::SilentAbort
        } else {
            NoFilePolicy::ShowError
        }
    }
}
