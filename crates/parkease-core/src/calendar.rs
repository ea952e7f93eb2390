// ── Calendar arithmetic ──

use chrono::{DateTime, Months, Utc};

/// Add `months` calendar months to `t`, clamping to the last valid day of
/// the target month when the literal day does not exist there
/// (Jan 31 + 1 month -> Feb 28, or Feb 29 in a leap year).
///
/// Negative `months` subtracts with the same clamping rule.
pub fn add_months(t: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let shifted = if months >= 0 {
        t.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        t.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    // Only fails hundreds of millennia outside the lot's operating window.
    shifted.expect("month arithmetic stays within chrono's representable range")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn plain_month_step() {
        assert_eq!(add_months(utc(2024, 3, 15, 9, 30, 0), 1), utc(2024, 4, 15, 9, 30, 0));
    }

    #[test]
    fn jan_31_clamps_to_feb_28() {
        assert_eq!(add_months(utc(2023, 1, 31, 12, 0, 0), 1), utc(2023, 2, 28, 12, 0, 0));
    }

    #[test]
    fn jan_31_clamps_to_feb_29_in_leap_year() {
        assert_eq!(add_months(utc(2024, 1, 31, 12, 0, 0), 1), utc(2024, 2, 29, 12, 0, 0));
    }

    #[test]
    fn carries_into_next_year() {
        assert_eq!(add_months(utc(2023, 11, 30, 8, 0, 0), 3), utc(2024, 2, 29, 8, 0, 0));
    }

    #[test]
    fn twelve_months_is_one_year() {
        assert_eq!(add_months(utc(2023, 6, 10, 0, 0, 0), 12), utc(2024, 6, 10, 0, 0, 0));
    }

    #[test]
    fn negative_months_subtract() {
        assert_eq!(add_months(utc(2023, 3, 31, 10, 0, 0), -1), utc(2023, 2, 28, 10, 0, 0));
    }

    #[test]
    fn time_of_day_is_preserved() {
        let t = utc(2024, 5, 31, 23, 59, 58);
        assert_eq!(add_months(t, 1).time(), t.time());
    }
}
