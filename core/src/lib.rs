// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Hebrew-calendar logic for a synagogue lobby display: which yahrzeits are due this month,
//! how they are paged onto the memorial board, and whether Slichot is said tonight.
//!
//! Calendar conversions are consumed through the [`HebrewDateOracle`] trait, so callers can
//! substitute their own calendar engine. [`CalendricalOracle`] is the arithmetic default.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::indexing_slicing))]

mod calendar;
mod config;
mod error;
mod memorial;
pub mod paging;
pub mod sizing;
pub mod slichot;
mod store;
mod types;
pub mod yahrzeit;

pub use crate::calendar::{
    CalendarDateParts, CalendricalOracle, HebrewDate, HebrewDateOracle, HebrewMonth,
    parse_calendar_date_string,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::error::Error;
pub use crate::memorial::{DisplayTemplate, MemorialRecord};
pub use crate::paging::{PagingResult, cells_per_page, next_page, paginate, slice_for_page};
pub use crate::sizing::{CandleSizes, FontSizes, SizingProfile, scale_factor_for, sizing_profile};
pub use crate::slichot::{SlichotContext, first_slichot_night, is_slichot_tonight};
pub use crate::store::{CURRENT_STORE_VERSION, MemorialStore, load_records};
pub use crate::types::{DisplayMode, DisplayModeConfig, Nusach};
pub use crate::yahrzeit::{filter_by_month, is_due, months_match};
