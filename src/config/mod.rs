//! Configuration management for the Republik CLI
//!
//! The config file holds the saved session (email + bearer token) and user
//! preferences. Commands and tests can point at a different file via the
//! `--config` flag or `REPUBLIK_CONFIG`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Saved sign-in session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,

    /// Custom API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// A saved sign-in session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Email address the token belongs to
    pub email: String,

    /// Bearer token, stored verbatim
    pub token: String,

    /// When the token was granted
    pub signed_in_at: DateTime<Utc>,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Default number of articles to list
    #[serde(default = "default_article_count")]
    pub article_count: usize,
}

fn default_article_count() -> usize {
    10
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            article_count: default_article_count(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".republik").join("config.yaml"))
    }

    /// Resolve the config path, honoring an override
    pub fn resolve_path(path_override: Option<&str>) -> Result<PathBuf> {
        match path_override {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, honoring a path override
    pub fn load_at(path_override: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path_override)?;
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration, honoring a path override
    pub fn save_at(&self, path_override: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path_override)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds a credential; keep it private to the owner
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Get the saved session, or an error telling the user to sign in
    pub fn require_session(&self) -> Result<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| ConfigError::MissingSession.into())
    }
}
