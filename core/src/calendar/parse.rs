// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

/// The numeric components of a `YYYY-MM-DD` string.
///
/// Parsing never fails: malformed input yields [`CalendarDateParts::ZERO`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDateParts {
    /// Day of the month.
    pub day: u32,

    /// Month of the year, 1-based.
    pub month: u32,

    /// Gregorian year.
    pub year: u32,
}

impl CalendarDateParts {
    /// The sentinel produced for unparseable input.
    pub const ZERO: Self = Self {
        day: 0,
        month: 0,
        year: 0,
    };

    /// Whether these are the all-zero failure sentinel.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The Gregorian date, if the components form a real calendar date.
    pub fn to_date(&self) -> Option<Date> {
        let year = i16::try_from(self.year).ok()?;
        let month = i8::try_from(self.month).ok()?;
        let day = i8::try_from(self.day).ok()?;
        Date::new(year, month, day).ok()
    }
}

/// Parses a `YYYY-MM-DD` string into its components.
///
/// Any missing or non-numeric component yields [`CalendarDateParts::ZERO`]. Calendar validity
/// (e.g. February 30th) is not checked here, see [`CalendarDateParts::to_date`].
pub fn parse_calendar_date_string(s: &str) -> CalendarDateParts {
    let mut parts = s.trim().split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return CalendarDateParts::ZERO;
    };

    match (parse_number(year), parse_number(month), parse_number(day)) {
        (Some(year), Some(month), Some(day)) => CalendarDateParts { day, month, year },
        _ => CalendarDateParts::ZERO,
    }
}

fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
