//! Application configuration module
//!
//! This module centralizes all application configuration settings using `confy`
//! for automatic serialization and OS-specific config directory management.

use crate::constant::{AI_RESPONSE_DELAY_MS, APP_NAME, MAX_RECENT_DOCUMENTS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Add a document to the recently reviewed list. In-memory only;
    /// callers persist the batch with [`Config::save`] once they are done
    /// so a short-lived process cannot exit with the write still in flight.
    pub fn add_recent_document(&mut self, path: PathBuf) {
        // Move the path to the front
        self.settings.recent_documents.retain(|p| p != &path);
        self.settings.recent_documents.insert(0, path);
        self.settings.recent_documents.truncate(MAX_RECENT_DOCUMENTS);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self {
            settings: Settings::default(),
        })
    }
}

fn default_response_delay_ms() -> u64 {
    AI_RESPONSE_DELAY_MS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Simulated assistant reply delay in milliseconds
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Recently reviewed document paths
    #[serde(default)]
    pub recent_documents: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            response_delay_ms: AI_RESPONSE_DELAY_MS,
            recent_documents: Vec::new(),
        }
    }
}
