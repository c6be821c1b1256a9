// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::Nusach;
use crate::calendar::{HebrewDate, HebrewDateOracle, HebrewMonth};

/// Until this hour, the morning still belongs to the previous night's recitation.
const MORNING_CUTOFF_HOUR: u8 = 9;

/// Ashkenazi Slichot starts at least this many days before Rosh Hashanah.
const ASHKENAZ_MIN_LEAD_DAYS: i64 = 4;

/// Last day of the Ashkenazi window, counted from its first night.
const ASHKENAZ_WINDOW_DAYS: i64 = 11;

/// Everything needed to decide whether Slichot is said tonight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlichotContext {
    /// Current Hebrew month.
    pub hebrew_month: HebrewMonth,

    /// Current day of the Hebrew month.
    pub hebrew_day: u8,

    /// Local hour, 0 to 23.
    pub hour_of_day: u8,

    /// Whether the current Hebrew year is a leap year.
    pub leap_year: bool,

    /// Liturgical custom.
    pub nusach: Nusach,

    /// Current Hebrew year.
    pub hebrew_year: i32,
}

impl SlichotContext {
    /// Builds the context for `today` at `hour_of_day`.
    pub const fn new(today: &HebrewDate, hour_of_day: u8, nusach: Nusach) -> Self {
        Self {
            hebrew_month: today.month,
            hebrew_day: today.day,
            hour_of_day,
            leap_year: today.is_leap_year,
            nusach,
            hebrew_year: today.year,
        }
    }

    fn today(&self) -> HebrewDate {
        HebrewDate::new(
            self.hebrew_year,
            self.hebrew_month,
            self.hebrew_day,
            self.leap_year,
        )
    }
}

/// Whether Slichot is recited tonight.
///
/// Through Tishrei 8 it is always said; past the last night, and on Elul 29, only the early
/// morning still counts. During Elul the start depends on the custom, see
/// [`first_slichot_night`].
pub fn is_slichot_tonight<O>(oracle: &O, ctx: &SlichotContext) -> bool
where
    O: HebrewDateOracle + ?Sized,
{
    let morning = ctx.hour_of_day < MORNING_CUTOFF_HOUR;
    match (ctx.hebrew_month, ctx.hebrew_day) {
        (HebrewMonth::Tishrei, 2..=8) => true,
        (HebrewMonth::Tishrei, _) => morning,
        (HebrewMonth::Elul, 29..) => morning,
        (HebrewMonth::Elul, day) => match ctx.nusach {
            Nusach::Sephardic => day >= 2,
            Nusach::Ashkenaz => {
                let first = first_slichot_night(oracle, ctx.hebrew_year, Nusach::Ashkenaz);
                let today = oracle.absolute_day_number(&ctx.today());
                (first..=first + ASHKENAZ_WINDOW_DAYS).contains(&today)
            }
        },
        _ => false,
    }
}

/// Absolute day number of the first Slichot night in the Elul of `year`.
///
/// Sephardim start on the second of Elul. Ashkenazim start on the Saturday night falling at
/// least four days before the following Rosh Hashanah.
pub fn first_slichot_night<O>(oracle: &O, year: i32, nusach: Nusach) -> i64
where
    O: HebrewDateOracle + ?Sized,
{
    match nusach {
        Nusach::Sephardic => {
            let date = HebrewDate::new(year, HebrewMonth::Elul, 2, oracle.is_leap_year(year));
            oracle.absolute_day_number(&date)
        }
        Nusach::Ashkenaz => {
            let next = year + 1;
            let rosh_hashanah =
                HebrewDate::new(next, HebrewMonth::Tishrei, 1, oracle.is_leap_year(next));
            let new_year = oracle.absolute_day_number(&rosh_hashanah);
            oracle.saturday_on_or_before(new_year - ASHKENAZ_MIN_LEAD_DAYS)
        }
    }
}
