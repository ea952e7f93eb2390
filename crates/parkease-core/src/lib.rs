// parkease-core: Occupancy and billing engine for a multi-floor parking facility.

pub mod calendar;
pub mod error;
pub mod lot;
pub mod model;
pub mod report;
pub mod snapshot;
pub mod tariff;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::LotError;
pub use lot::{ALERT_THRESHOLD, EntryReceipt, ExitReceipt, Lot, SubscriptionReceipt};
pub use report::Report;
pub use snapshot::{LotSnapshot, SubscriptionRecord, TicketRecord, VehicleRecord};
pub use tariff::Tariff;

// Re-export model types at the crate root for ergonomics.
pub use model::{Location, Plate, Subscription, Ticket, Vehicle};
