//! Injectable source of "today".
//!
//! Booking validation compares the requested move-in date against the current
//! calendar date. Reading that through a [`Clock`] keeps the rule
//! deterministic under test.

use chrono::Utc;

use crate::types::Date;

/// Supplies the current calendar date, already normalized to midnight.
pub trait Clock: Send + Sync {
    fn today(&self) -> Date;
}

/// Wall-clock implementation. Dates are taken in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Utc::now().date_naive()
    }
}

/// A clock frozen at a given date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = Date::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn system_clock_matches_utc_date() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(today >= before && today <= after);
    }
}
