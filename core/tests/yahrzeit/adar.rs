// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use luach_core::{
    CalendricalOracle, DisplayMode, HebrewDate, HebrewDateOracle, HebrewMonth, filter_by_month,
};

use crate::common::{FakeOracle, ids, record};

const LEAP_ADAR_I: HebrewDate = HebrewDate::new(5784, HebrewMonth::AdarI, 14, true);
const LEAP_ADAR_II: HebrewDate = HebrewDate::new(5784, HebrewMonth::AdarII, 14, true);
const REGULAR_ADAR: HebrewDate = HebrewDate::new(5785, HebrewMonth::AdarI, 14, false);

fn oracle() -> FakeOracle {
    FakeOracle::new(REGULAR_ADAR)
        // death in Adar I of a leap year
        .with(date(2008, 2, 20), HebrewDate::new(5768, HebrewMonth::AdarI, 14, true))
        // death in Adar II of a leap year
        .with(date(2008, 3, 21), HebrewDate::new(5768, HebrewMonth::AdarII, 14, true))
        // death in the single Adar of a regular year
        .with(date(1990, 3, 10), HebrewDate::new(5750, HebrewMonth::AdarI, 13, false))
        // death in Sh'vat
        .with(date(1990, 2, 1), HebrewDate::new(5750, HebrewMonth::Shvat, 6, false))
}

fn records() -> Vec<luach_core::MemorialRecord> {
    vec![
        record("leap-adar-1", Some("2008-02-20")),
        record("leap-adar-2", Some("2008-03-21")),
        record("regular-adar", Some("1990-03-10")),
        record("shvat", Some("1990-02-01")),
    ]
}

fn shown_on(today: &HebrewDate) -> Vec<String> {
    let records = records();
    ids(&filter_by_month(&oracle(), &records, today, DisplayMode::Monthly))
}

#[test]
fn leap_year_adar_one_shows_leap_adar_one_and_regular_adar() {
    assert_eq!(shown_on(&LEAP_ADAR_I), ["leap-adar-1", "regular-adar"]);
}

#[test]
fn leap_year_adar_two_shows_only_leap_adar_two() {
    assert_eq!(shown_on(&LEAP_ADAR_II), ["leap-adar-2"]);
}

#[test]
fn regular_year_adar_shows_every_adar() {
    assert_eq!(
        shown_on(&REGULAR_ADAR),
        ["leap-adar-1", "leap-adar-2", "regular-adar"]
    );
}

#[test]
fn adar_deaths_are_not_shown_in_neighbouring_months() {
    let shvat = HebrewDate::new(5785, HebrewMonth::Shvat, 1, false);
    assert_eq!(shown_on(&shvat), ["shvat"]);

    let nisan = HebrewDate::new(5784, HebrewMonth::Nisan, 1, true);
    assert!(shown_on(&nisan).is_empty());
}

#[test]
fn arithmetic_calendar_applies_adar_rules() {
    let records = vec![
        record("leap-adar-1", Some("2024-02-23")),
        record("leap-adar-2", Some("2024-03-24")),
        record("regular-adar", Some("2023-03-07")),
    ];

    for (today, expected) in [
        (date(2024, 2, 23), vec!["leap-adar-1", "regular-adar"]),
        (date(2024, 3, 24), vec!["leap-adar-2"]),
        (
            date(2025, 3, 14),
            vec!["leap-adar-1", "leap-adar-2", "regular-adar"],
        ),
    ] {
        let oracle = CalendricalOracle::at(today);
        let hebrew = oracle.current_hebrew_date();
        let shown = filter_by_month(&oracle, &records, &hebrew, DisplayMode::Monthly);
        assert_eq!(ids(&shown), expected, "today {today}");
    }
}
