//! Session configuration.
//!
//! Configuration priority: ~/.config/parlor/config.toml > environment
//! variables > built-in defaults.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// What the controller does when a clear request fails server-side.
///
/// The transcript is never speculatively cleared either way; this only
/// decides whether the user is told about the failure.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClearFailureNotice {
    /// Raise a banner with the classified error text.
    Banner,
    /// Log the failure and say nothing in the UI.
    Silent,
}

impl Default for ClearFailureNotice {
    fn default() -> Self {
        ClearFailureNotice::Banner
    }
}

/// Settings for a chat session.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the assistant backend.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Policy for surfacing clear-session failures.
    #[serde(default)]
    pub clear_failure_notice: ClearFailureNotice,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            clear_failure_notice: ClearFailureNotice::default(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from the default location, the environment, or
    /// built-in defaults, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_path()
            && path.exists()
        {
            return Self::load_from(&path);
        }

        let mut config = Self::default();
        if let Ok(url) = std::env::var("PARLOR_BACKEND_URL") {
            config.backend_url = url;
        }
        Ok(config)
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// The default config file location (`~/.config/parlor/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("parlor").join("config.toml"))
    }
}
