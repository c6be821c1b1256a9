// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-arithmetic Hebrew calendar over R.D. (Rata Die) day numbers.
//!
//! R.D. 1 is Monday, 0001-01-01 in the proleptic Gregorian calendar, so `abs % 7 == 0` is a
//! Sunday. Years are computed from the molad of Tishrei with the four postponement rules.

use std::ops::RangeInclusive;

use jiff::Span;
use jiff::civil::{self, Date};

use crate::calendar::{HebrewDate, HebrewMonth};

/// Offset from the elapsed-days count to an R.D. day number.
const EPOCH: i64 = -1_373_428;

/// Day of week of Saturday, with Sunday as 0.
pub(crate) const SATURDAY: i64 = 6;

const MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Nisan,
    HebrewMonth::Iyyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tamuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shvat,
    HebrewMonth::AdarI,
    HebrewMonth::AdarII,
];

/// Seven leap years in every nineteen-year cycle.
pub(crate) fn is_leap_year(year: i32) -> bool {
    (1 + i64::from(year) * 7).rem_euclid(19) < 7
}

pub(crate) fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch to 1 Tishrei of `year`, after postponements.
fn elapsed_days(year: i32) -> i64 {
    let prev = i64::from(year) - 1;
    let months_elapsed = 235 * prev.div_euclid(19)
        + 12 * prev.rem_euclid(19)
        + (prev.rem_euclid(19) * 7 + 1).div_euclid(19);
    let parts_elapsed = 204 + 793 * months_elapsed.rem_euclid(1080);
    let hours_elapsed = 5
        + 12 * months_elapsed
        + 793 * months_elapsed.div_euclid(1080)
        + parts_elapsed.div_euclid(1080);
    let parts = parts_elapsed.rem_euclid(1080) + 1080 * hours_elapsed.rem_euclid(24);
    let day = 1 + 29 * months_elapsed + hours_elapsed.div_euclid(24);

    let mut alt_day = day;
    if parts >= 19_440
        || (day.rem_euclid(7) == 2 && parts >= 9_924 && !is_leap_year(year))
        || (day.rem_euclid(7) == 1 && parts >= 16_789 && is_leap_year(year - 1))
    {
        alt_day += 1;
    }

    // lo ADU rosh: never on Sunday, Wednesday or Friday
    if matches!(alt_day.rem_euclid(7), 0 | 3 | 5) {
        alt_day += 1;
    }
    alt_day
}

/// R.D. of 1 Tishrei of `year`.
fn new_year(year: i32) -> i64 {
    EPOCH + elapsed_days(year)
}

pub(crate) fn days_in_year(year: i32) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

fn long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

pub(crate) fn days_in_month(month: HebrewMonth, year: i32) -> u8 {
    match month {
        HebrewMonth::Iyyar
        | HebrewMonth::Tamuz
        | HebrewMonth::Elul
        | HebrewMonth::Tevet
        | HebrewMonth::AdarII => 29,
        HebrewMonth::AdarI if !is_leap_year(year) => 29,
        HebrewMonth::Cheshvan if !long_cheshvan(year) => 29,
        HebrewMonth::Kislev if short_kislev(year) => 29,
        _ => 30,
    }
}

/// Total length of the months of `year` whose numbers fall in `range`.
fn sum_months(year: i32, range: RangeInclusive<u8>) -> i64 {
    let last = months_in_year(year);
    MONTHS
        .iter()
        .filter(|m| range.contains(&m.number()) && m.number() <= last)
        .map(|&m| i64::from(days_in_month(m, year)))
        .sum()
}

pub(crate) fn hebrew_to_absolute(year: i32, month: HebrewMonth, day: u8) -> i64 {
    let tishrei = HebrewMonth::Tishrei.number();
    let mut days = i64::from(day);
    if month < HebrewMonth::Tishrei {
        days += sum_months(year, tishrei..=13);
        days += sum_months(year, 1..=month.number() - 1);
    } else {
        days += sum_months(year, tishrei..=month.number() - 1);
    }
    new_year(year) + days - 1
}

pub(crate) fn absolute_to_hebrew(abs: i64) -> HebrewDate {
    // Mean year length is a little over 365.2468 days, so this never overshoots
    #[expect(clippy::cast_possible_truncation)]
    let mut year = ((abs - EPOCH) * 100).div_euclid(36_525) as i32 - 1;
    while new_year(year + 1) <= abs {
        year += 1;
    }

    let first = if abs < hebrew_to_absolute(year, HebrewMonth::Nisan, 1) {
        HebrewMonth::Tishrei
    } else {
        HebrewMonth::Nisan
    };
    let last = months_in_year(year);
    let month = MONTHS
        .iter()
        .copied()
        .filter(|m| *m >= first && m.number() <= last)
        .find(|&m| abs <= hebrew_to_absolute(year, m, days_in_month(m, year)))
        .unwrap_or(first);

    let start = hebrew_to_absolute(year, month, 1);
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = (1 + abs - start) as u8;
    HebrewDate::new(year, month, day, is_leap_year(year))
}

pub(crate) fn gregorian_to_absolute(date: Date) -> i64 {
    let prior = i64::from(date.year()) - 1;
    i64::from(date.day_of_year()) + 365 * prior + prior.div_euclid(4) - prior.div_euclid(100)
        + prior.div_euclid(400)
}

pub(crate) fn absolute_to_gregorian(abs: i64) -> Option<Date> {
    let span = Span::new().try_days(abs - 1).ok()?;
    civil::date(1, 1, 1).checked_add(span).ok()
}

/// The R.D. of the given weekday (Sunday = 0) falling on or before `abs`.
pub(crate) fn day_on_or_before(weekday: i64, abs: i64) -> i64 {
    abs - (abs - weekday).rem_euclid(7)
}
