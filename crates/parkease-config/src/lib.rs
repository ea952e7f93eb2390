//! Shared configuration for the parkease CLI.
//!
//! TOML file + `PARKEASE_*` environment overrides, resolved through
//! figment, plus the platform-conventional paths for the config file and
//! the lot data file. The core engine never reads config -- the CLI loads
//! a [`Config`] here and hands the resolved values in.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use parkease_core::Tariff;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Path of the JSON data file holding the serialized lot. Defaults to
    /// the platform data directory when unset.
    pub data_file: Option<PathBuf>,

    /// Facility layout and alerting.
    #[serde(default)]
    pub lot: LotSettings,

    /// Parking prices in whole currency units.
    #[serde(default)]
    pub tariff: Tariff,
}

/// Facility layout: capacity is `floors * spaces_per_floor`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LotSettings {
    #[serde(default = "default_floors")]
    pub floors: u32,

    #[serde(default = "default_spaces_per_floor")]
    pub spaces_per_floor: u32,

    /// Fraction of remaining capacity at or below which check-in warns.
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: f64,
}

impl Default for LotSettings {
    fn default() -> Self {
        Self {
            floors: default_floors(),
            spaces_per_floor: default_spaces_per_floor(),
            alert_threshold: default_alert_threshold(),
        }
    }
}

fn default_floors() -> u32 {
    4
}
fn default_spaces_per_floor() -> u32 {
    48
}
fn default_alert_threshold() -> f64 {
    parkease_core::ALERT_THRESHOLD
}

// ── Paths ───────────────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "parkease", "parkease").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Resolve the lot data file path: the configured override, or the
/// platform data directory.
pub fn data_path(config: &Config) -> PathBuf {
    if let Some(ref path) = config.data_file {
        return path.clone();
    }
    ProjectDirs::from("com", "parkease", "parkease").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("lot.json");
            p
        },
        |dirs| dirs.data_dir().join("lot.json"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("parkease");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment. Nested keys use a
/// double-underscore env separator (`PARKEASE_TARIFF__PER_HOUR=3`).
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("PARKEASE_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_str)?;
    Ok(path)
}
