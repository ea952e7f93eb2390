// ── Occupancy reporting ──
//
// Read-only aggregation over every ticket the lot has ever issued, inside
// and outside vehicles alike. A report is built in one pass by `collect`
// and never mutated afterwards, so a stale report cannot be re-fed and
// double-counted.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Timelike};
use serde::Serialize;

use crate::lot::Lot;

/// Daily and hourly entry histograms for a lot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    per_day: BTreeMap<NaiveDate, u64>,
    /// Keyed by hour of day, 0-23. Hours with no entries are absent.
    per_hour: BTreeMap<u32, u64>,
}

impl Report {
    /// Scan every ticket of every vehicle in the lot.
    pub fn collect(lot: &Lot) -> Self {
        let mut report = Self::default();
        for vehicle in lot.vehicles() {
            for ticket in vehicle.tickets() {
                let arrival = ticket.arrival();
                *report.per_day.entry(arrival.date_naive()).or_insert(0) += 1;
                *report.per_hour.entry(arrival.hour()).or_insert(0) += 1;
            }
        }
        report
    }

    pub fn per_day(&self) -> &BTreeMap<NaiveDate, u64> {
        &self.per_day
    }

    pub fn per_hour(&self) -> &BTreeMap<u32, u64> {
        &self.per_hour
    }

    pub fn total_entries(&self) -> u64 {
        self.per_day.values().sum()
    }

    /// Day(s) with the most entries, ties included.
    pub fn busiest_days(&self) -> Vec<(NaiveDate, u64)> {
        maxima(&self.per_day)
    }

    /// Hour(s) of day with the most entries, ties included.
    pub fn busiest_hours(&self) -> Vec<(u32, u64)> {
        maxima(&self.per_hour)
    }
}

fn maxima<K: Copy + Ord>(map: &BTreeMap<K, u64>) -> Vec<(K, u64)> {
    let Some(max) = map.values().copied().max() else {
        return Vec::new();
    };
    map.iter()
        .filter(|(_, count)| **count == max)
        .map(|(key, count)| (*key, *count))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::model::Plate;
    use crate::tariff::Tariff;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 15, 0).unwrap()
    }

    fn lot_with_entries(entries: &[DateTime<Utc>]) -> Lot {
        let mut lot = Lot::with_capacity(100, Tariff::default());
        for (i, at) in entries.iter().enumerate() {
            let plate = Plate::new(format!("CAR{i:03}"));
            lot.check_in(&plate, *at).unwrap();
        }
        lot
    }

    #[test]
    fn empty_lot_yields_empty_report() {
        let lot = Lot::with_capacity(10, Tariff::default());
        let report = Report::collect(&lot);
        assert_eq!(report.total_entries(), 0);
        assert!(report.busiest_days().is_empty());
        assert!(report.busiest_hours().is_empty());
    }

    #[test]
    fn counts_entries_per_day_and_hour() {
        let lot = lot_with_entries(&[
            utc(2024, 11, 28, 8),
            utc(2024, 11, 28, 8),
            utc(2024, 11, 28, 17),
            utc(2024, 11, 29, 8),
        ]);
        let report = Report::collect(&lot);

        let nov28 = NaiveDate::from_ymd_opt(2024, 11, 28).unwrap();
        assert_eq!(report.per_day()[&nov28], 3);
        assert_eq!(report.per_hour()[&8], 3);
        assert_eq!(report.per_hour()[&17], 1);
        assert_eq!(report.total_entries(), 4);
    }

    #[test]
    fn counts_tickets_of_departed_vehicles_too() {
        let mut lot = lot_with_entries(&[utc(2024, 11, 28, 8)]);
        lot.check_out(&Plate::new("CAR000"), utc(2024, 11, 28, 10)).unwrap();
        let report = Report::collect(&lot);
        assert_eq!(report.total_entries(), 1);
    }

    #[test]
    fn busiest_reports_all_ties() {
        let lot = lot_with_entries(&[
            utc(2024, 11, 28, 8),
            utc(2024, 11, 28, 17),
            utc(2024, 11, 29, 8),
            utc(2024, 11, 29, 17),
        ]);
        let report = Report::collect(&lot);
        assert_eq!(report.busiest_days().len(), 2);
        assert_eq!(report.busiest_hours(), vec![(8, 2), (17, 2)]);
    }

    #[test]
    fn single_peak_day_wins() {
        let lot = lot_with_entries(&[
            utc(2024, 11, 28, 8),
            utc(2024, 11, 28, 9),
            utc(2024, 11, 29, 8),
        ]);
        let report = Report::collect(&lot);
        let nov28 = NaiveDate::from_ymd_opt(2024, 11, 28).unwrap();
        assert_eq!(report.busiest_days(), vec![(nov28, 2)]);
    }
}
