mod config;
pub mod database;

pub use config::{Config, NotificationsConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/objtimer[-dev]/` based on OBJTIMER_ENV.
///
/// Set OBJTIMER_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("OBJTIMER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("objtimer-dev")
    } else {
        base_dir.join("objtimer")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
