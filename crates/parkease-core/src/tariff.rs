// ── Tariff calculation ──
//
// Stateless pricing of a stay from its ticket and the vehicle's optional
// subscription. Prices live in an explicit `Tariff` value handed to the
// lot at construction -- never process-wide constants -- so callers and
// tests can vary them freely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Subscription, Ticket};

/// Parking prices in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    #[serde(default = "default_per_hour")]
    pub per_hour: u64,
    #[serde(default = "default_per_day")]
    pub per_day: u64,
    #[serde(default = "default_per_month")]
    pub per_month: u64,
}

fn default_per_hour() -> u64 {
    2
}
fn default_per_day() -> u64 {
    12
}
fn default_per_month() -> u64 {
    100
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            per_hour: default_per_hour(),
            per_day: default_per_day(),
            per_month: default_per_month(),
        }
    }
}

impl Tariff {
    /// Hour count at which a day at the day rate becomes cheaper than
    /// continuing to bill hourly.
    pub fn switch_hours(&self) -> u64 {
        if self.per_hour == 0 {
            u64::MAX
        } else {
            self.per_day / self.per_hour
        }
    }

    /// Amount due for the stay that began with `ticket`, evaluated at `now`.
    ///
    /// A subscription that was active when the vehicle arrived waives the
    /// whole stay, even if it has lapsed while the vehicle was parked.
    /// Otherwise the stay is split into whole days plus whole hours, and
    /// hourly charges beyond the break-even point fold into one extra day.
    pub fn amount_due(
        &self,
        ticket: &Ticket,
        subscription: Option<&Subscription>,
        now: DateTime<Utc>,
    ) -> u64 {
        if subscription.is_some_and(|sub| sub.was_active(ticket.arrival())) {
            return 0;
        }

        let parked_secs = u64::try_from(ticket.parked(now).num_seconds()).unwrap_or(0);
        let mut days = parked_secs / 86_400;
        let mut hours = (parked_secs % 86_400) / 3_600;
        if hours > self.switch_hours() {
            hours -= self.switch_hours();
            days += 1;
        }
        days * self.per_day + hours * self.per_hour
    }

    /// Price of `months` of subscription, returned to the caller for
    /// display. There is no payment ledger; nothing is deducted anywhere.
    pub fn subscription_price(&self, months: u32) -> u64 {
        u64::from(months) * self.per_month
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use super::*;
    use crate::model::Plate;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn ticket_at(arrival: DateTime<Utc>) -> Ticket {
        Ticket::issue(Plate::new("AAA111"), arrival)
    }

    #[test]
    fn default_switch_point_is_six_hours() {
        assert_eq!(Tariff::default().switch_hours(), 6);
    }

    #[test]
    fn under_an_hour_is_free() {
        let tariff = Tariff::default();
        let arrival = utc(2024, 3, 1, 8);
        let due = tariff.amount_due(&ticket_at(arrival), None, arrival + TimeDelta::minutes(45));
        assert_eq!(due, 0);
    }

    #[test]
    fn six_hours_bill_hourly() {
        let tariff = Tariff::default();
        let arrival = utc(2024, 3, 1, 8);
        let due = tariff.amount_due(&ticket_at(arrival), None, arrival + TimeDelta::hours(6));
        assert_eq!(due, 12);
    }

    #[test]
    fn seven_hours_fold_into_a_day_plus_one_hour() {
        let tariff = Tariff::default();
        let arrival = utc(2024, 3, 1, 8);
        let due = tariff.amount_due(&ticket_at(arrival), None, arrival + TimeDelta::hours(7));
        assert_eq!(due, 14);
    }

    #[test]
    fn one_day_and_one_hour() {
        let tariff = Tariff::default();
        let arrival = utc(2024, 3, 1, 8);
        let due = tariff.amount_due(&ticket_at(arrival), None, arrival + TimeDelta::hours(25));
        assert_eq!(due, 14);
    }

    #[test]
    fn fold_applies_past_whole_days_too() {
        let tariff = Tariff::default();
        let arrival = utc(2024, 3, 1, 8);
        let now = arrival + TimeDelta::days(2) + TimeDelta::hours(7);
        // 2 days + 7h -> 3 days + 1h
        assert_eq!(tariff.amount_due(&ticket_at(arrival), None, now), 38);
    }

    #[test]
    fn subscription_active_at_arrival_waives_the_stay() {
        let tariff = Tariff::default();
        let start = utc(2024, 1, 1, 0);
        let sub = Subscription::new(Plate::new("AAA111"), 1, start);
        let arrival = utc(2024, 1, 20, 9);
        // Checkout long after the subscription lapsed: still free.
        let now = utc(2024, 4, 1, 9);
        assert_eq!(tariff.amount_due(&ticket_at(arrival), Some(&sub), now), 0);
    }

    #[test]
    fn subscription_started_after_arrival_does_not_cover() {
        let tariff = Tariff::default();
        let arrival = utc(2024, 1, 20, 9);
        let sub = Subscription::new(Plate::new("AAA111"), 1, utc(2024, 1, 21, 0));
        let now = arrival + TimeDelta::hours(3);
        assert_eq!(tariff.amount_due(&ticket_at(arrival), Some(&sub), now), 6);
    }

    #[test]
    fn custom_tariff_moves_the_switch_point() {
        let tariff = Tariff {
            per_hour: 3,
            per_day: 30,
            per_month: 200,
        };
        assert_eq!(tariff.switch_hours(), 10);
        let arrival = utc(2024, 3, 1, 8);
        let due = tariff.amount_due(&ticket_at(arrival), None, arrival + TimeDelta::hours(11));
        // 11h > 10 -> 1 day + 1h
        assert_eq!(due, 33);
    }

    #[test]
    fn subscription_price_is_per_month() {
        assert_eq!(Tariff::default().subscription_price(3), 300);
    }
}
