//! Game configuration and loader.
//!
//! Settings come from `manor.toml` in the data directory. Any key left out
//! takes its default, and a missing or broken file means all defaults.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Eight minutes.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 480;

/// Tunable settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManorConfig {
    /// Countdown budget, in seconds.
    pub time_limit_secs: u64,
    /// Per-character delay for narrative text.
    pub type_delay_ms: u64,
    /// Minimum per-character delay while the intro plays.
    pub intro_type_delay_ms: u64,
    /// How long the kitchen scare stays up.
    pub jumpscare_ms: u64,
    /// Directory holding the sound files.
    pub audio_dir: PathBuf,
}

impl Default for ManorConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            type_delay_ms: 10,
            intro_type_delay_ms: 12,
            jumpscare_ms: 500,
            audio_dir: PathBuf::from("Assets/Audio"),
        }
    }
}

/// Loads configuration from a TOML file, falling back to defaults on error.
///
/// This function never fails. Problems reading or parsing the file are logged
/// with `warn!` and the hardcoded defaults are used instead.
pub fn load_config(toml_path: &Path) -> ManorConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!("configuration loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load configuration from '{}': {e:#}. Using hardcoded defaults.",
                toml_path.display()
            );
            ManorConfig::default()
        },
    }
}

/// Attempts to load configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn try_load_config(toml_path: &Path) -> Result<ManorConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading configuration from '{}'", toml_path.display()))?;
    parse_config(&text).with_context(|| format!("parsing configuration from '{}'", toml_path.display()))
}

/// Parse configuration TOML text.
///
/// # Errors
/// Returns an error on malformed TOML or mistyped values.
pub fn parse_config(text: &str) -> Result<ManorConfig> {
    let config = toml::from_str(text)?;
    Ok(config)
}
