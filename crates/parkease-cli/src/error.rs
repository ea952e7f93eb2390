//! CLI error types with miette diagnostics.
//!
//! Maps `LotError` variants into user-facing errors with actionable help
//! text and distinct exit codes per failure class.

use miette::Diagnostic;
use thiserror::Error;

use parkease_core::LotError;

/// Exit codes per failure class.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 3;
    pub const CONFLICT: i32 = 4;
    pub const CAPACITY: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Lot state ────────────────────────────────────────────────────
    #[error("the lot is full (capacity {capacity})")]
    #[diagnostic(
        code(parkease::lot_full),
        help("Free a space first: parkease check-out <PLATE>")
    )]
    LotFull { capacity: u32 },

    #[error("vehicle '{plate}' is already inside the lot")]
    #[diagnostic(code(parkease::already_inside))]
    AlreadyInside { plate: String },

    #[error("vehicle '{plate}' is already registered")]
    #[diagnostic(code(parkease::already_registered))]
    AlreadyRegistered { plate: String },

    #[error("vehicle '{plate}' is not in the lot")]
    #[diagnostic(
        code(parkease::unknown_vehicle),
        help("Check the plate, or pre-register it: parkease register <PLATE>")
    )]
    UnknownVehicle { plate: String },

    // ── Subscriptions ────────────────────────────────────────────────
    #[error("vehicle '{plate}' already has a subscription active until {expires}")]
    #[diagnostic(
        code(parkease::subscription_active),
        help("Extend it instead: parkease subscription extend {plate} <MONTHS>")
    )]
    SubscriptionActive { plate: String, expires: String },

    #[error("vehicle '{plate}' has no subscription to extend")]
    #[diagnostic(
        code(parkease::no_subscription),
        help("Start one with: parkease subscription add {plate} <MONTHS>")
    )]
    NoSubscription { plate: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("invalid lot layout: {floors} floors x {spaces_per_floor} spaces per floor")]
    #[diagnostic(
        code(parkease::invalid_layout),
        help("floors and spaces_per_floor must both be positive; fix the [lot] section of the config file.")
    )]
    InvalidLayout { floors: u32, spaces_per_floor: u32 },

    #[error(transparent)]
    #[diagnostic(code(parkease::config))]
    Config(#[from] parkease_config::ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid data file: {0}")]
    #[diagnostic(
        code(parkease::data_file),
        help("The data file is not valid lot JSON; fix or remove it.")
    )]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LotFull { .. } => exit_code::CAPACITY,
            Self::AlreadyInside { .. }
            | Self::AlreadyRegistered { .. }
            | Self::SubscriptionActive { .. } => exit_code::CONFLICT,
            Self::UnknownVehicle { .. } | Self::NoSubscription { .. } => exit_code::NOT_FOUND,
            Self::InvalidLayout { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── LotError → CliError mapping ──────────────────────────────────────

impl From<LotError> for CliError {
    fn from(err: LotError) -> Self {
        match err {
            LotError::Full { capacity } => Self::LotFull { capacity },

            LotError::AlreadyInside { plate } => Self::AlreadyInside {
                plate: plate.to_string(),
            },

            LotError::AlreadyRegistered { plate } => Self::AlreadyRegistered {
                plate: plate.to_string(),
            },

            LotError::UnknownVehicle { plate } => Self::UnknownVehicle {
                plate: plate.to_string(),
            },

            LotError::SubscriptionActive { plate, expires } => Self::SubscriptionActive {
                plate: plate.to_string(),
                expires: expires.format("%Y-%m-%d").to_string(),
            },

            LotError::NoSubscription { plate } => Self::NoSubscription {
                plate: plate.to_string(),
            },

            LotError::InvalidLayout {
                floors,
                spaces_per_floor,
            } => Self::InvalidLayout {
                floors,
                spaces_per_floor,
            },
        }
    }
}
