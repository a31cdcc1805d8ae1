//! Persistent client settings.
//!
//! The file holds what the user chose. A `MAILFRONT_SERVER` override
//! applies to the running session only and is never written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable overriding [`Settings::server_url`].
pub const SERVER_ENV: &str = "MAILFRONT_SERVER";

/// Server used when nothing is configured.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000/";

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

/// Settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root URL of the mail backend, as saved.
    pub server_url: String,
    /// Color scheme.
    pub theme: ThemeChoice,
    /// Session-only server taken from the environment.
    #[serde(skip)]
    server_override: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER.to_string(),
            theme: ThemeChoice::default(),
            server_override: None,
        }
    }
}

impl Settings {
    /// Location of the settings file: `<config_dir>/mailfront/settings.json`.
    #[must_use]
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mailfront")
            .join("settings.json")
    }

    /// Parses settings from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `contents` is not valid JSON.
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(Into::into)
    }

    /// Loads settings from [`Settings::path`] with the `MAILFRONT_SERVER`
    /// override applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub async fn load() -> Result<Self> {
        Self::load_from(&Self::path(), std::env::var(SERVER_ENV).ok()).await
    }

    /// Loads settings from `path`, then applies `server_override`.
    ///
    /// A missing file gives defaults. A malformed one is logged and also
    /// gives defaults, so the override still takes effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub async fn load_from(path: &Path, server_override: Option<String>) -> Result<Self> {
        let mut settings = match tokio::fs::read_to_string(path).await {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed settings at {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => return Err(e.into()),
        };

        settings.apply_override(server_override);
        Ok(settings)
    }

    /// Writes settings to [`Settings::path`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::path()).await
    }

    /// Writes settings to `path`, creating the directory. The session
    /// override is not saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Server to talk to this session: the override when set, otherwise
    /// [`Settings::server_url`].
    #[must_use]
    pub fn server(&self) -> &str {
        self.server_override.as_deref().unwrap_or(&self.server_url)
    }

    /// Checks that [`Settings::server`] can address the backend.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let server = self.server();
        let url = url::Url::parse(server)?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::Config(format!(
                "unsupported scheme {other} in {server}"
            ))),
        }
    }

    /// Sets the session-only server. Blank values are ignored.
    pub fn apply_override(&mut self, server: Option<String>) {
        if let Some(server) = server.filter(|s| !s.trim().is_empty()) {
            tracing::debug!("Server overridden by {}: {}", SERVER_ENV, server);
            self.server_override = Some(server);
        }
    }
}
