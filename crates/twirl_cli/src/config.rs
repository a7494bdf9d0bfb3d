//! Configuration loading for the CLI.
//!
//! Order, later wins: project `.env` (walking up from the working directory),
//! then the settings file (`--config`, else `~/.twirl/config.toml` when present),
//! then `TWIRL_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use twirl_constant::app::{CONFIG_DIR, CONFIG_FILE};
use twirl_core::SettingsFile;

/// Loads the nearest `.env` into the process environment. Existing variables win.
pub fn load_env() {
    let Ok(cwd) = std::env::current_dir() else {
        return;
    };
    let mut dir = cwd.as_path();
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            break;
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }
}

/// `~/.twirl/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Settings file layer plus environment overrides. An explicit path must exist.
pub fn load_settings_file(explicit: Option<&Path>) -> Result<SettingsFile> {
    let file = match explicit {
        Some(path) => SettingsFile::load(path)
            .with_context(|| format!("reading settings from {}", path.display()))?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => SettingsFile::load(&path)
                .with_context(|| format!("reading settings from {}", path.display()))?,
            None => SettingsFile::default(),
        },
    };
    let env = SettingsFile::from_env().context("reading TWIRL_* environment")?;
    tracing::debug!(?explicit, "settings file resolved");
    Ok(file.overlay(env))
}
