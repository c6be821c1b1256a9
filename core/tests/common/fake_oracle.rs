// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A toy calendar oracle with explicitly registered conversions.
//!
//! Every year has thirteen 30-day months in civil order (Tishrei first), so absolute day
//! numbers are `year * 390 + month_index * 30 + day - 1`, and every multiple of 7 is a
//! Saturday.

use std::collections::HashMap;

use jiff::civil::Date;
use luach_core::{HebrewDate, HebrewDateOracle, HebrewMonth};

#[derive(Debug, Clone)]
pub struct FakeOracle {
    today: HebrewDate,
    conversions: HashMap<Date, HebrewDate>,
}

#[allow(dead_code)]
impl FakeOracle {
    pub fn new(today: HebrewDate) -> Self {
        Self {
            today,
            conversions: HashMap::new(),
        }
    }

    /// Registers the Hebrew date `to_hebrew` returns for `date`.
    pub fn with(mut self, date: Date, hebrew: HebrewDate) -> Self {
        self.conversions.insert(date, hebrew);
        self
    }
}

fn civil_index(month: HebrewMonth) -> i64 {
    match month {
        HebrewMonth::Tishrei => 0,
        HebrewMonth::Cheshvan => 1,
        HebrewMonth::Kislev => 2,
        HebrewMonth::Tevet => 3,
        HebrewMonth::Shvat => 4,
        HebrewMonth::AdarI => 5,
        HebrewMonth::AdarII => 6,
        HebrewMonth::Nisan => 7,
        HebrewMonth::Iyyar => 8,
        HebrewMonth::Sivan => 9,
        HebrewMonth::Tamuz => 10,
        HebrewMonth::Av => 11,
        HebrewMonth::Elul => 12,
    }
}

impl HebrewDateOracle for FakeOracle {
    fn to_hebrew(&self, date: Date) -> HebrewDate {
        *self
            .conversions
            .get(&date)
            .unwrap_or_else(|| panic!("no conversion registered for {date}"))
    }

    fn is_leap_year(&self, year: i32) -> bool {
        year % 2 == 0
    }

    fn current_hebrew_date(&self) -> HebrewDate {
        self.today
    }

    fn saturday_on_or_before(&self, absolute: i64) -> i64 {
        absolute - absolute.rem_euclid(7)
    }

    fn absolute_day_number(&self, date: &HebrewDate) -> i64 {
        i64::from(date.year) * 390 + civil_index(date.month) * 30 + i64::from(date.day) - 1
    }
}
