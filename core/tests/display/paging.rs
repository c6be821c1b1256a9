// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use luach_core::{
    DisplayMode, HebrewDate, HebrewMonth, cells_per_page, filter_by_month, next_page, paginate,
    slice_for_page,
};

use crate::common::{FakeOracle, record, records_numbered};

#[test]
fn total_pages_is_ceiling_of_records_per_cells() {
    for n in 0..40 {
        for rows in 1..5 {
            for columns in 1..5 {
                let cells = (rows * columns) as usize;
                let result = paginate(records_numbered(n), rows, columns);
                let expected = if n == 0 { 0 } else { n.div_ceil(cells) };
                assert_eq!(result.total_pages, expected, "{n} on {rows}x{columns}");
            }
        }
    }
}

#[test]
fn pages_never_exceed_cells_and_reconstruct_the_list() {
    for n in [0, 1, 5, 12, 13, 29] {
        let records = records_numbered(n);
        let result = paginate(records.clone(), 4, 3);
        let cells = cells_per_page(4, 3);

        let mut joined = Vec::new();
        for page in 0..result.total_pages {
            let slice = slice_for_page(&result.filtered_records, page, cells);
            assert!(slice.len() <= cells);
            assert!(!slice.is_empty());
            joined.extend_from_slice(slice);
        }
        assert_eq!(joined, records);
        assert!(slice_for_page(&result.filtered_records, result.total_pages, cells).is_empty());
    }
}

#[test]
fn rotation_wraps_around() {
    let result = paginate(records_numbered(7), 1, 3);
    assert_eq!(result.total_pages, 3);

    let mut page = 0;
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(page);
        page = next_page(page, result.total_pages);
    }
    assert_eq!(seen, [0, 1, 2, 0, 1, 2]);
}

#[test]
fn filtered_records_feed_the_pager() {
    let today = HebrewDate::new(5785, HebrewMonth::Nisan, 1, false);
    let nisan = HebrewDate::new(5760, HebrewMonth::Nisan, 3, true);
    let iyyar = HebrewDate::new(5760, HebrewMonth::Iyyar, 3, true);
    let oracle = FakeOracle::new(today)
        .with(date(2000, 4, 8), nisan)
        .with(date(2000, 5, 8), iyyar);

    let records: Vec<_> = (0..5)
        .map(|i| {
            let date = if i % 2 == 0 { "2000-04-08" } else { "2000-05-08" };
            record(&i.to_string(), Some(date))
        })
        .collect();

    let due = filter_by_month(&oracle, &records, &today, DisplayMode::Monthly);
    let result = paginate(due, 1, 2);
    assert_eq!(result.total_pages, 2);

    let second: Vec<_> = result.page(1, 2).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(second, ["4"]);
}
