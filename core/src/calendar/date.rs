// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::calendar::HebrewMonth;

/// A date in the Hebrew calendar, as produced by a [`crate::HebrewDateOracle`].
///
/// NOTE: `month` is never [`HebrewMonth::AdarII`] unless `is_leap_year` is set. This is not
/// checked here, the oracle is responsible for upholding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    /// Year since creation (anno mundi).
    pub year: i32,

    /// The month of the year.
    pub month: HebrewMonth,

    /// Day of the month, 1 to 30.
    pub day: u8,

    /// Whether `year` has thirteen months.
    pub is_leap_year: bool,
}

impl HebrewDate {
    /// Creates a new Hebrew date.
    pub const fn new(year: i32, month: HebrewMonth, day: u8, is_leap_year: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_year,
        }
    }

    /// The name of the month, taking the leap year into account.
    pub const fn month_name(&self) -> &'static str {
        self.month.name(self.is_leap_year)
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}
