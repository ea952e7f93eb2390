// ── Subscription ──
//
// A monthly pass that waives per-stay billing. The end date is always
// derived from start + length; extending bumps the length and never
// touches the start.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::plate::Plate;
use crate::calendar::add_months;

/// Monthly parking pass for a single plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    plate: Plate,
    length_months: u32,
    start: DateTime<Utc>,
}

impl Subscription {
    pub(crate) fn new(plate: Plate, length_months: u32, start: DateTime<Utc>) -> Self {
        Self {
            plate,
            length_months,
            start,
        }
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn length_months(&self) -> u32 {
        self.length_months
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// First instant no longer covered by the pass.
    pub fn end(&self) -> DateTime<Utc> {
        add_months(self.start, self.length_months as i32)
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.end()
    }

    /// Whether the pass covered the instant `at`. A pass never covers
    /// instants before its start.
    pub fn was_active(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end()
    }

    /// Lengthen the pass by `months` without moving the start.
    pub(crate) fn extend(&mut self, months: u32) {
        self.length_months += months;
    }
}
