//! TOML-based application configuration.
//!
//! Stores notification preferences:
//! - whether notifications are enabled at all
//! - the speech command used for voice delivery (e.g. `espeak`, `say`)
//! - whether fired messages are also echoed to stdout
//!
//! Configuration is stored at `~/.config/objtimer/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::notify::{CommandNotifier, Notifier, NullNotifier, StdoutNotifier};

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Space-separated speech command line; the message is appended as the
    /// final argument. `None` disables voice delivery.
    #[serde(default)]
    pub speech_command: Option<String>,
    /// Also print fired messages to stdout.
    #[serde(default = "default_true")]
    pub echo: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speech_command: None,
            echo: true,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/objtimer/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk; missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&text)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let text = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, text).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Build the notifier chain the configuration describes.
    pub fn notifier(&self) -> Box<dyn Notifier> {
        if !self.notifications.enabled {
            return Box::new(NullNotifier);
        }
        let speech = self
            .notifications
            .speech_command
            .as_deref()
            .and_then(CommandNotifier::from_command_line);
        match (speech, self.notifications.echo) {
            (Some(cmd), true) => Box::new(EchoAnd(cmd)),
            (Some(cmd), false) => Box::new(cmd),
            (None, true) => Box::new(StdoutNotifier),
            (None, false) => Box::new(NullNotifier),
        }
    }
}

/// Speak and echo.
struct EchoAnd(CommandNotifier);

impl Notifier for EchoAnd {
    fn notify(&self, message: &str) {
        StdoutNotifier.notify(message);
        self.0.notify(message);
    }
}

fn default_true() -> bool {
    true
}
