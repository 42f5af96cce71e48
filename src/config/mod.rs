//! Configuration module for Mini Perplexity
//!
//! Handles loading settings from YAML files, `.env` files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "MINI_PERPLEXITY_SETTINGS_PATH";

/// Candidate settings file locations, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/mini-perplexity/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("mini-perplexity/settings.yml"));
    }
    paths
}

/// Load settings from file or use defaults, then overlay the environment.
///
/// A `.env` file in the working directory is read first when present.
pub fn load() -> Result<Settings> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment from: {}", path.display());
    }

    let mut settings = match locate() {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_env();

    for name in settings.missing_credentials() {
        warn!("{} is not set; provider requests will be rejected", name);
    }

    Ok(settings)
}

fn locate() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        warn!("{} points to missing file: {}", SETTINGS_PATH_VAR, path.display());
    }

    default_paths().into_iter().find(|p| p.exists())
}
