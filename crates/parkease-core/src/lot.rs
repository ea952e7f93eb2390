// ── Lot state machine ──
//
// The facility itself: one plate-keyed vehicle map, a fixed capacity, and
// the check-in / check-out transitions. Per plate the lifecycle is
// Unknown -> Inside <-> Outside; vehicles are moved, never duplicated.
// Every operation is all-or-nothing: a failed call leaves no partial state.

use chrono::{DateTime, TimeDelta, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::LotError;
use crate::model::{Location, Plate, Subscription, Vehicle};
use crate::tariff::Tariff;

/// Fraction of remaining capacity at or below which check-in raises the
/// low-capacity alert.
pub const ALERT_THRESHOLD: f64 = 0.1;

/// A multi-floor parking facility.
#[derive(Debug, Clone)]
pub struct Lot {
    /// Every vehicle ever seen, keyed by plate. A plate appears at most
    /// once; its `Location` says which side of the barrier it is on.
    pub(crate) vehicles: IndexMap<Plate, Vehicle>,
    pub(crate) total_spaces: u32,
    pub(crate) tariff: Tariff,
    pub(crate) alert_threshold: f64,
}

/// What check-in hands back for receipt display.
#[derive(Debug, Clone, Serialize)]
pub struct EntryReceipt {
    pub plate: Plate,
    pub arrival: DateTime<Utc>,
    pub available_spaces: u32,
    /// Set when remaining capacity dropped to the alert threshold.
    pub low_capacity: bool,
}

/// What check-out hands back for receipt display.
#[derive(Debug, Clone, Serialize)]
pub struct ExitReceipt {
    pub plate: Plate,
    /// Length of the stay, from the most recent ticket's arrival.
    pub parked_seconds: u64,
    pub amount_due: u64,
    /// Snapshot of the vehicle's subscription at checkout time, if any.
    pub subscription: Option<Subscription>,
}

/// Confirmation of a subscription purchase or extension.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionReceipt {
    pub plate: Plate,
    pub months_added: u32,
    /// Display price; there is no ledger to deduct it from.
    pub price: u64,
    pub starts: DateTime<Utc>,
    pub ends: DateTime<Utc>,
}

impl Lot {
    /// Create an empty lot of `floors * spaces_per_floor` spaces.
    pub fn new(floors: u32, spaces_per_floor: u32, tariff: Tariff) -> Result<Self, LotError> {
        if floors == 0 || spaces_per_floor == 0 {
            return Err(LotError::InvalidLayout {
                floors,
                spaces_per_floor,
            });
        }
        Ok(Self::with_capacity(floors * spaces_per_floor, tariff))
    }

    /// Create an empty lot with an explicit total capacity.
    pub fn with_capacity(total_spaces: u32, tariff: Tariff) -> Self {
        Self {
            vehicles: IndexMap::new(),
            total_spaces,
            tariff,
            alert_threshold: ALERT_THRESHOLD,
        }
    }

    /// Override the low-capacity alert threshold (a fraction of total
    /// capacity, default 0.1).
    pub fn with_alert_threshold(mut self, threshold: f64) -> Self {
        self.alert_threshold = threshold;
        self
    }

    pub fn total_spaces(&self) -> u32 {
        self.total_spaces
    }

    pub fn tariff(&self) -> Tariff {
        self.tariff
    }

    /// Every vehicle the lot has ever seen, inside and outside, in
    /// first-seen order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub fn vehicle(&self, plate: &Plate) -> Option<&Vehicle> {
        self.vehicles.get(plate)
    }

    fn inside_count(&self) -> u32 {
        let count = self
            .vehicles
            .values()
            .filter(|v| v.location() == Location::Inside)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Remaining capacity; never negative, never above `total_spaces`.
    pub fn available_spaces(&self) -> u32 {
        self.total_spaces.saturating_sub(self.inside_count())
    }

    /// Admit a vehicle. Reuses the known vehicle for a returning plate
    /// (history and subscription preserved) and issues a fresh ticket for
    /// every entry, subscribed or not.
    pub fn check_in(&mut self, plate: &Plate, now: DateTime<Utc>) -> Result<EntryReceipt, LotError> {
        if self.available_spaces() == 0 {
            return Err(LotError::Full {
                capacity: self.total_spaces,
            });
        }
        if self
            .vehicles
            .get(plate)
            .is_some_and(|v| v.location() == Location::Inside)
        {
            return Err(LotError::AlreadyInside {
                plate: plate.clone(),
            });
        }

        let vehicle = self
            .vehicles
            .entry(plate.clone())
            .or_insert_with(|| Vehicle::new(plate.clone(), Location::Outside));
        vehicle.record_entry(now);
        vehicle.set_location(Location::Inside);
        debug!(%plate, "vehicle checked in");

        let available = self.available_spaces();
        let low_capacity = self.is_low_capacity(available);
        if low_capacity {
            warn!(
                available,
                total = self.total_spaces,
                "lot almost full"
            );
        }

        Ok(EntryReceipt {
            plate: plate.clone(),
            arrival: now,
            available_spaces: available,
            low_capacity,
        })
    }

    /// Release a vehicle and price its stay from the most recent ticket
    /// and the subscription state.
    pub fn check_out(&mut self, plate: &Plate, now: DateTime<Utc>) -> Result<ExitReceipt, LotError> {
        let tariff = self.tariff;
        let vehicle = self
            .vehicles
            .get_mut(plate)
            .filter(|v| v.location() == Location::Inside)
            .ok_or_else(|| LotError::UnknownVehicle {
                plate: plate.clone(),
            })?;

        let parked = vehicle
            .last_ticket()
            .map_or_else(TimeDelta::zero, |t| t.parked(now));
        let amount_due = vehicle
            .last_ticket()
            .map_or(0, |t| tariff.amount_due(t, vehicle.subscription(), now));

        vehicle.set_location(Location::Outside);
        debug!(%plate, amount_due, "vehicle checked out");

        Ok(ExitReceipt {
            plate: plate.clone(),
            parked_seconds: u64::try_from(parked.num_seconds()).unwrap_or(0),
            amount_due,
            subscription: vehicle.subscription().cloned(),
        })
    }

    /// Administrative pre-registration: create a vehicle directly outside,
    /// with no ticket, so it can hold a subscription before ever entering.
    pub fn register_vehicle(&mut self, plate: &Plate) -> Result<(), LotError> {
        if self.vehicles.contains_key(plate) {
            return Err(LotError::AlreadyRegistered {
                plate: plate.clone(),
            });
        }
        self.vehicles
            .insert(plate.clone(), Vehicle::new(plate.clone(), Location::Outside));
        debug!(%plate, "vehicle registered");
        Ok(())
    }

    /// Start a subscription for a known plate. Fails if one is still
    /// active; an expired one is overwritten.
    pub fn subscribe(
        &mut self,
        plate: &Plate,
        months: u32,
        now: DateTime<Utc>,
    ) -> Result<SubscriptionReceipt, LotError> {
        let tariff = self.tariff;
        let vehicle = self
            .vehicles
            .get_mut(plate)
            .ok_or_else(|| LotError::UnknownVehicle {
                plate: plate.clone(),
            })?;
        let sub = vehicle.start_subscription(months, now)?;
        debug!(%plate, months, "subscription started");
        Ok(SubscriptionReceipt {
            plate: plate.clone(),
            months_added: months,
            price: tariff.subscription_price(months),
            starts: sub.start(),
            ends: sub.end(),
        })
    }

    /// Lengthen an existing subscription; the incremental months are
    /// priced, the start never moves.
    pub fn extend_subscription(
        &mut self,
        plate: &Plate,
        months: u32,
    ) -> Result<SubscriptionReceipt, LotError> {
        let tariff = self.tariff;
        let vehicle = self
            .vehicles
            .get_mut(plate)
            .ok_or_else(|| LotError::UnknownVehicle {
                plate: plate.clone(),
            })?;
        let sub = vehicle.extend_subscription(months)?;
        debug!(%plate, months, "subscription extended");
        Ok(SubscriptionReceipt {
            plate: plate.clone(),
            months_added: months,
            price: tariff.subscription_price(months),
            starts: sub.start(),
            ends: sub.end(),
        })
    }

    /// Look up a known plate's subscription (`None` when it never had one).
    pub fn subscription(&self, plate: &Plate) -> Result<Option<&Subscription>, LotError> {
        self.vehicles
            .get(plate)
            .map(Vehicle::subscription)
            .ok_or_else(|| LotError::UnknownVehicle {
                plate: plate.clone(),
            })
    }

    fn is_low_capacity(&self, available: u32) -> bool {
        f64::from(available) / f64::from(self.total_spaces) <= self.alert_threshold
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn low_capacity_alert_fires_at_threshold() {
        let mut lot = Lot::with_capacity(10, Tariff::default());
        for i in 0..8 {
            let receipt = lot.check_in(&Plate::new(format!("CAR{i}")), now()).unwrap();
            assert!(!receipt.low_capacity, "no alert at {} spaces", receipt.available_spaces);
        }
        // Ninth entry leaves 1 of 10 spaces: 0.1 <= 0.1 triggers.
        let receipt = lot.check_in(&Plate::new("CAR8"), now()).unwrap();
        assert!(receipt.low_capacity);
    }

    #[test]
    fn full_lot_reports_capacity_before_duplicates() {
        let mut lot = Lot::with_capacity(1, Tariff::default());
        lot.check_in(&Plate::new("AAA111"), now()).unwrap();
        let err = lot.check_in(&Plate::new("AAA111"), now()).unwrap_err();
        assert_eq!(err, LotError::Full { capacity: 1 });
    }

    #[test]
    fn returning_vehicle_keeps_its_history() {
        let mut lot = Lot::with_capacity(5, Tariff::default());
        let plate = Plate::new("AAA111");
        lot.check_in(&plate, now()).unwrap();
        lot.check_out(&plate, now()).unwrap();
        lot.check_in(&plate, now()).unwrap();
        assert_eq!(lot.vehicle(&plate).unwrap().tickets().len(), 2);
    }

    #[test]
    fn register_then_subscribe_without_entry() {
        let mut lot = Lot::with_capacity(5, Tariff::default());
        let plate = Plate::new("SUB001");
        lot.register_vehicle(&plate).unwrap();
        let receipt = lot.subscribe(&plate, 2, now()).unwrap();
        assert_eq!(receipt.price, 200);
        assert_eq!(lot.vehicle(&plate).unwrap().tickets().len(), 0);
        assert_eq!(lot.available_spaces(), 5);
    }

    #[test]
    fn expired_subscription_is_overwritten_not_accumulated() {
        let mut lot = Lot::with_capacity(5, Tariff::default());
        let plate = Plate::new("SUB002");
        lot.register_vehicle(&plate).unwrap();
        lot.subscribe(&plate, 1, now()).unwrap();

        let later = crate::calendar::add_months(now(), 2);
        let receipt = lot.subscribe(&plate, 3, later).unwrap();
        assert_eq!(receipt.starts, later);
        assert_eq!(lot.vehicle(&plate).unwrap().subscription().unwrap().length_months(), 3);
    }
}
