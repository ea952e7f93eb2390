// ── Persistence records ──
//
// The wire shape of a serialized lot, as the external persistence
// collaborator stores it: two vehicle-record sequences plus the capacity,
// with timestamps as epoch-seconds floats. These records are the only
// serialization surface of the lot; the in-memory vehicle map never
// leaves the process directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lot::Lot;
use crate::model::{Location, Plate, Subscription, Ticket, Vehicle};
use crate::tariff::Tariff;

/// Epoch-seconds floats, the data file's timestamp encoding. Microsecond
/// precision survives the round trip, comfortably beyond the contract's
/// to-the-second requirement.
mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_f64(dt.timestamp_micros() as f64 / 1e6)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let secs = f64::deserialize(de)?;
        let micros = (secs * 1e6).round();
        if !micros.is_finite() {
            return Err(de::Error::custom("epoch timestamp is not finite"));
        }
        DateTime::from_timestamp_micros(micros as i64)
            .ok_or_else(|| de::Error::custom("epoch timestamp out of range"))
    }
}

/// One ticket as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    pub plate: Plate,
    #[serde(with = "epoch_seconds")]
    pub arrival: DateTime<Utc>,
}

/// One subscription as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub plate: Plate,
    pub length_months: u32,
    #[serde(with = "epoch_seconds")]
    pub start: DateTime<Utc>,
}

/// One vehicle as persisted: plate, chronological tickets, optional
/// subscription. Which collection it sits in encodes its location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub plate: Plate,
    pub tickets: Vec<TicketRecord>,
    pub subscription: Option<SubscriptionRecord>,
}

/// The whole lot as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotSnapshot {
    pub vehicles_inside: Vec<VehicleRecord>,
    pub vehicles_outside: Vec<VehicleRecord>,
    pub total_spaces: u32,
}

// ── Domain -> record ────────────────────────────────────────────────

impl From<&Ticket> for TicketRecord {
    fn from(ticket: &Ticket) -> Self {
        Self {
            plate: ticket.plate().clone(),
            arrival: ticket.arrival(),
        }
    }
}

impl From<&Subscription> for SubscriptionRecord {
    fn from(sub: &Subscription) -> Self {
        Self {
            plate: sub.plate().clone(),
            length_months: sub.length_months(),
            start: sub.start(),
        }
    }
}

impl From<&Vehicle> for VehicleRecord {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            plate: vehicle.plate().clone(),
            tickets: vehicle.tickets().iter().map(TicketRecord::from).collect(),
            subscription: vehicle.subscription().map(SubscriptionRecord::from),
        }
    }
}

// ── Record -> domain ────────────────────────────────────────────────

fn vehicle_from_record(record: VehicleRecord, location: Location) -> Vehicle {
    let tickets = record
        .tickets
        .into_iter()
        .map(|t| Ticket::issue(t.plate, t.arrival))
        .collect();
    let subscription = record
        .subscription
        .map(|s| Subscription::new(s.plate, s.length_months, s.start));
    Vehicle::from_parts(record.plate, tickets, subscription, location)
}

impl Lot {
    /// Capture the lot's full state in the persistence shape.
    pub fn snapshot(&self) -> LotSnapshot {
        let mut vehicles_inside = Vec::new();
        let mut vehicles_outside = Vec::new();
        for vehicle in self.vehicles.values() {
            let record = VehicleRecord::from(vehicle);
            match vehicle.location() {
                Location::Inside => vehicles_inside.push(record),
                Location::Outside => vehicles_outside.push(record),
            }
        }
        LotSnapshot {
            vehicles_inside,
            vehicles_outside,
            total_spaces: self.total_spaces,
        }
    }

    /// Rebuild the object graph from a snapshot: plate-keyed identity,
    /// ticket order, and optional subscription all reconstructed exactly.
    pub fn from_snapshot(snapshot: LotSnapshot, tariff: Tariff) -> Self {
        let mut lot = Self::with_capacity(snapshot.total_spaces, tariff);
        for record in snapshot.vehicles_inside {
            let vehicle = vehicle_from_record(record, Location::Inside);
            lot.vehicles.insert(vehicle.plate().clone(), vehicle);
        }
        for record in snapshot.vehicles_outside {
            let vehicle = vehicle_from_record(record, Location::Outside);
            lot.vehicles.insert(vehicle.plate().clone(), vehicle);
        }
        lot
    }
}
