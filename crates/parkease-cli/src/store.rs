//! Lot persistence: the JSON data file holding the serialized lot.
//!
//! The engine only exposes `snapshot`/`from_snapshot`; everything about
//! where and how the state lives on disk is this module's business.

use std::fs;
use std::path::Path;

use parkease_config::Config;
use parkease_core::{Lot, LotSnapshot};

use crate::error::CliError;

/// Load the lot from `path`, or start a fresh one from the configured
/// layout when no data file exists yet.
pub fn load_lot(path: &Path, config: &Config) -> Result<Lot, CliError> {
    if path.exists() {
        let raw = fs::read_to_string(path)?;
        let snapshot: LotSnapshot = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded lot snapshot");
        Ok(Lot::from_snapshot(snapshot, config.tariff)
            .with_alert_threshold(config.lot.alert_threshold))
    } else {
        tracing::debug!(path = %path.display(), "no data file, starting a fresh lot");
        let lot = Lot::new(config.lot.floors, config.lot.spaces_per_floor, config.tariff)?;
        Ok(lot.with_alert_threshold(config.lot.alert_threshold))
    }
}

/// Serialize the lot back to `path`, creating parent directories as needed.
pub fn save_lot(path: &Path, lot: &Lot) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&lot.snapshot())?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "saved lot snapshot");
    Ok(())
}
