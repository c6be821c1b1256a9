// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arithmetic;
mod date;
mod month;
mod oracle;
mod parse;

pub use date::HebrewDate;
pub use month::HebrewMonth;
pub use oracle::{CalendricalOracle, HebrewDateOracle};
pub use parse::{CalendarDateParts, parse_calendar_date_string};
