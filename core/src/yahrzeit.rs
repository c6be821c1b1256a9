// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::calendar::{HebrewDate, HebrewDateOracle, HebrewMonth};
use crate::{DisplayMode, MemorialRecord};

/// Whether a death on `death` is commemorated during the Hebrew month of `today`.
///
/// Outside Adar the months must be equal. For Adar:
/// - both years leap: Adar I and Adar II only match themselves;
/// - death in a regular year, today in a leap year: observed in Adar I, never Adar II;
/// - today in a regular year: a death in any Adar matches the single Adar.
pub fn months_match(death: &HebrewDate, today: &HebrewDate) -> bool {
    if !death.month.is_adar() || !today.month.is_adar() {
        return death.month == today.month;
    }

    match (today.is_leap_year, death.is_leap_year) {
        (true, true) => death.month == today.month,
        (true, false) => today.month == HebrewMonth::AdarI,
        (false, _) => true,
    }
}

/// Whether the yahrzeit of `record` falls in the Hebrew month of `today`.
///
/// Records without a valid date of death are never due.
pub fn is_due<O>(oracle: &O, record: &MemorialRecord, today: &HebrewDate) -> bool
where
    O: HebrewDateOracle + ?Sized,
{
    let Some(date) = record.death_date() else {
        tracing::trace!(
            id = %record.id,
            date = ?record.date_of_death,
            "skipping record without a valid date of death"
        );
        return false;
    };
    months_match(&oracle.to_hebrew(date), today)
}

/// Selects the records to show for `today`, keeping their input order.
pub fn filter_by_month<'a, O>(
    oracle: &O,
    records: &'a [MemorialRecord],
    today: &HebrewDate,
    mode: DisplayMode,
) -> Vec<&'a MemorialRecord>
where
    O: HebrewDateOracle + ?Sized,
{
    match mode {
        DisplayMode::All => records.iter().collect(),
        DisplayMode::Monthly => records
            .iter()
            .filter(|record| is_due(oracle, record, today))
            .collect(),
    }
}
