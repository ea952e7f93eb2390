// ── Core error types ──
//
// User-facing errors from the occupancy engine. Every variant carries the
// structured data the presentation layer needs (plates, expiry dates) --
// consumers format text, the engine never does.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::Plate;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    #[error("no spaces available (capacity {capacity})")]
    Full { capacity: u32 },

    #[error("vehicle '{plate}' is already inside the lot")]
    AlreadyInside { plate: Plate },

    #[error("vehicle '{plate}' is already registered")]
    AlreadyRegistered { plate: Plate },

    #[error("vehicle '{plate}' is not in the lot")]
    UnknownVehicle { plate: Plate },

    #[error("vehicle '{plate}' already has a subscription active until {expires}")]
    SubscriptionActive {
        plate: Plate,
        /// When the existing subscription runs out.
        expires: DateTime<Utc>,
    },

    #[error("vehicle '{plate}' has no subscription to extend")]
    NoSubscription { plate: Plate },

    #[error("invalid lot layout: {floors} floors x {spaces_per_floor} spaces per floor")]
    InvalidLayout { floors: u32, spaces_per_floor: u32 },
}
