// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories.

use luach_core::MemorialRecord;

/// A record with the given id and an optional date of death.
pub fn record(id: &str, date_of_death: Option<&str>) -> MemorialRecord {
    let record = MemorialRecord::new(id, format!("Name {id}"));
    match date_of_death {
        Some(date) => record.with_date_of_death(date),
        None => record,
    }
}

/// `n` records without dates, with ids "0", "1", ...
#[allow(dead_code)]
pub fn records_numbered(n: usize) -> Vec<MemorialRecord> {
    (0..n).map(|i| record(&i.to_string(), None)).collect()
}

/// The ids of `records`, in order.
#[allow(dead_code)]
pub fn ids(records: &[&MemorialRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}
