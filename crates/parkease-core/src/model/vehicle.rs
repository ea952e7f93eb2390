// ── Vehicle ──
//
// One physical vehicle known to the facility: its ticket history, its
// optional subscription, and which side of the barrier it is on. A vehicle
// is created on first check-in (or pre-registration) and never destroyed;
// it migrates between Inside and Outside over its lifetime.

use chrono::{DateTime, Utc};

use super::plate::Plate;
use super::subscription::Subscription;
use super::ticket::Ticket;
use crate::error::LotError;

/// Which side of the barrier a vehicle is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    plate: Plate,
    /// Append-only; insertion order is chronological order.
    tickets: Vec<Ticket>,
    subscription: Option<Subscription>,
    location: Location,
}

impl Vehicle {
    pub(crate) fn new(plate: Plate, location: Location) -> Self {
        Self {
            plate,
            tickets: Vec::new(),
            subscription: None,
            location,
        }
    }

    pub(crate) fn from_parts(
        plate: Plate,
        tickets: Vec<Ticket>,
        subscription: Option<Subscription>,
        location: Location,
    ) -> Self {
        Self {
            plate,
            tickets,
            subscription,
            location,
        }
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn last_ticket(&self) -> Option<&Ticket> {
        self.tickets.last()
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Append a fresh ticket for an entry happening at `now`.
    pub(crate) fn record_entry(&mut self, now: DateTime<Utc>) {
        self.tickets.push(Ticket::issue(self.plate.clone(), now));
    }

    /// Start a new subscription, overwriting an expired one. An active
    /// subscription is never implicitly extended.
    pub(crate) fn start_subscription(
        &mut self,
        months: u32,
        now: DateTime<Utc>,
    ) -> Result<&Subscription, LotError> {
        if let Some(sub) = &self.subscription {
            if sub.is_active(now) {
                return Err(LotError::SubscriptionActive {
                    plate: self.plate.clone(),
                    expires: sub.end(),
                });
            }
        }
        let sub = Subscription::new(self.plate.clone(), months, now);
        Ok(self.subscription.insert(sub))
    }

    /// Lengthen the existing subscription.
    pub(crate) fn extend_subscription(&mut self, months: u32) -> Result<&Subscription, LotError> {
        match &mut self.subscription {
            Some(sub) => {
                sub.extend(months);
                Ok(sub)
            }
            None => Err(LotError::NoSubscription {
                plate: self.plate.clone(),
            }),
        }
    }
}
