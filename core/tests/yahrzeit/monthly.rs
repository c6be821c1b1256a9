// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use luach_core::{
    CalendricalOracle, DisplayMode, HebrewDate, HebrewDateOracle, HebrewMonth, filter_by_month,
};

use crate::common::{FakeOracle, ids, record, records_numbered};

const TEVET: HebrewDate = HebrewDate::new(5785, HebrewMonth::Tevet, 10, false);

#[test]
fn all_mode_returns_every_record_in_order() {
    let oracle = FakeOracle::new(TEVET);
    let mut records = records_numbered(5);
    records.push(record("bad", Some("invalid-date")));

    let shown = filter_by_month(&oracle, &records, &TEVET, DisplayMode::All);
    let expected: Vec<_> = records.iter().collect();
    assert_eq!(shown, expected);
}

#[test]
fn monthly_mode_keeps_matching_months_in_input_order() {
    let oracle = FakeOracle::new(TEVET)
        .with(date(2000, 1, 1), HebrewDate::new(5760, HebrewMonth::Tevet, 23, false))
        .with(date(2001, 5, 6), HebrewDate::new(5761, HebrewMonth::Iyyar, 13, false))
        .with(date(1996, 12, 25), HebrewDate::new(5757, HebrewMonth::Tevet, 14, false));
    let records = vec![
        record("c", Some("1996-12-25")),
        record("a", Some("2000-01-01")),
        record("b", Some("2001-05-06")),
    ];

    let shown = filter_by_month(&oracle, &records, &TEVET, DisplayMode::Monthly);
    assert_eq!(ids(&shown), ["c", "a"]);
}

#[test]
fn records_without_valid_dates_are_never_due() {
    let oracle = FakeOracle::new(TEVET);
    let records = vec![
        record("missing", None),
        record("empty", Some("")),
        record("garbage", Some("invalid-date")),
        record("impossible", Some("2023-02-30")),
    ];

    for month in [HebrewMonth::Tevet, HebrewMonth::AdarI, HebrewMonth::AdarII] {
        let today = HebrewDate::new(5784, month, 1, true);
        let shown = filter_by_month(&oracle, &records, &today, DisplayMode::Monthly);
        assert!(shown.is_empty(), "{month:?}");
    }
}

#[test]
fn malformed_record_does_not_hide_others() {
    let oracle = FakeOracle::new(TEVET)
        .with(date(2000, 1, 1), HebrewDate::new(5760, HebrewMonth::Tevet, 23, false));
    let records = vec![
        record("bad", Some("2000-13-01")),
        record("good", Some("2000-01-01")),
    ];

    let shown = filter_by_month(&oracle, &records, &TEVET, DisplayMode::Monthly);
    assert_eq!(ids(&shown), ["good"]);
}

#[test]
fn arithmetic_calendar_finds_this_months_yahrzeits() {
    // 2025-01-10 is 10 Tevet 5785
    let oracle = CalendricalOracle::at(date(2025, 1, 10));
    let today = oracle.current_hebrew_date();
    assert_eq!(today.month, HebrewMonth::Tevet);

    let records = vec![
        record("tevet", Some("2000-01-01")),
        record("iyyar", Some("2001-05-06")),
    ];
    let shown = filter_by_month(&oracle, &records, &today, DisplayMode::Monthly);
    assert_eq!(ids(&shown), ["tevet"]);
}
