// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use jiff::civil::Date;

use crate::calendar::arithmetic;
use crate::calendar::{HebrewDate, HebrewMonth};

/// Hebrew calendar primitives consumed by the yahrzeit filter and the Slichot calculator.
///
/// Implementations must be pure: the same input always yields the same output. Callers make no
/// assumption about how often these methods are invoked.
pub trait HebrewDateOracle {
    /// Converts a Gregorian date to the Hebrew date of its daytime.
    fn to_hebrew(&self, date: Date) -> HebrewDate;

    /// Whether the Hebrew `year` has thirteen months.
    fn is_leap_year(&self, year: i32) -> bool;

    /// The Hebrew date of "today", as seen by this oracle.
    fn current_hebrew_date(&self) -> HebrewDate;

    /// The absolute day number of the Saturday on or before `absolute`.
    fn saturday_on_or_before(&self, absolute: i64) -> i64;

    /// The absolute day number of a Hebrew date, comparable across years.
    fn absolute_day_number(&self, date: &HebrewDate) -> i64;
}

/// Arithmetic Hebrew calendar, pinned to an explicit "today".
///
/// Absolute day numbers are R.D. (Rata Die), where day 1 is 0001-01-01 Gregorian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendricalOracle {
    today: Date,
}

impl CalendricalOracle {
    /// An oracle whose "today" is the given Gregorian date.
    pub const fn at(today: Date) -> Self {
        Self { today }
    }

    /// An oracle whose "today" is the current date in the system time zone.
    pub fn now() -> Self {
        Self::at(Zoned::now().date())
    }

    /// The Gregorian date this oracle treats as today.
    pub const fn today(&self) -> Date {
        self.today
    }

    /// Converts a Hebrew date back to the Gregorian calendar.
    pub fn to_gregorian(&self, date: &HebrewDate) -> Option<Date> {
        arithmetic::absolute_to_gregorian(self.absolute_day_number(date))
    }

    /// Converts an absolute day number to a Gregorian date.
    pub fn absolute_to_gregorian(&self, absolute: i64) -> Option<Date> {
        arithmetic::absolute_to_gregorian(absolute)
    }

    /// Number of days in the given month of a Hebrew year.
    pub fn days_in_month(&self, month: HebrewMonth, year: i32) -> u8 {
        arithmetic::days_in_month(month, year)
    }
}

impl HebrewDateOracle for CalendricalOracle {
    fn to_hebrew(&self, date: Date) -> HebrewDate {
        arithmetic::absolute_to_hebrew(arithmetic::gregorian_to_absolute(date))
    }

    fn is_leap_year(&self, year: i32) -> bool {
        arithmetic::is_leap_year(year)
    }

    fn current_hebrew_date(&self) -> HebrewDate {
        self.to_hebrew(self.today)
    }

    fn saturday_on_or_before(&self, absolute: i64) -> i64 {
        arithmetic::day_on_or_before(arithmetic::SATURDAY, absolute)
    }

    fn absolute_day_number(&self, date: &HebrewDate) -> i64 {
        arithmetic::hebrew_to_absolute(date.year, date.month, date.day)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn current_date_follows_pinned_today() {
        let oracle = CalendricalOracle::at(date(2025, 3, 14));
        let today = oracle.current_hebrew_date();
        assert_eq!(today, HebrewDate::new(5785, HebrewMonth::AdarI, 14, false));
        assert_eq!(oracle.today(), date(2025, 3, 14));
    }

    #[test]
    fn converts_hebrew_back_to_gregorian() {
        let oracle = CalendricalOracle::at(date(2024, 1, 1));
        let purim = HebrewDate::new(5784, HebrewMonth::AdarII, 14, true);
        assert_eq!(oracle.to_gregorian(&purim), Some(date(2024, 3, 24)));
        assert_eq!(oracle.days_in_month(HebrewMonth::AdarII, 5784), 29);
        assert_eq!(oracle.days_in_month(HebrewMonth::AdarI, 5784), 30);
    }

    #[test]
    fn saturday_is_stable_on_saturdays() {
        let oracle = CalendricalOracle::at(date(2024, 1, 1));
        let rh = HebrewDate::new(5785, HebrewMonth::Tishrei, 1, false);
        let abs = oracle.absolute_day_number(&rh);
        let saturday = oracle.saturday_on_or_before(abs - 4);
        assert_eq!(oracle.absolute_to_gregorian(saturday), Some(date(2024, 9, 28)));
        assert_eq!(oracle.saturday_on_or_before(saturday), saturday);
    }
}
