// ── Ticket ──

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::plate::Plate;

/// One visit record: issued at check-in, never mutated, retained forever
/// in the vehicle's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    plate: Plate,
    arrival: DateTime<Utc>,
}

impl Ticket {
    pub(crate) fn issue(plate: Plate, arrival: DateTime<Utc>) -> Self {
        Self { plate, arrival }
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Time parked so far. Computed at query time, never stored; zero if
    /// `now` somehow precedes the arrival.
    pub fn parked(&self, now: DateTime<Utc>) -> TimeDelta {
        (now - self.arrival).max(TimeDelta::zero())
    }
}
