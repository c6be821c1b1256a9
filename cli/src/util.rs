// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::civil::Date;
use luach_core::{Nusach, parse_calendar_date_string};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_date() -> Arg {
    arg!(--date <DATE> "Use this Gregorian date (YYYY-MM-DD) instead of today").value_parser(parse_date)
}

pub fn get_date(matches: &ArgMatches) -> Option<Date> {
    matches.get_one("date").copied()
}

pub fn arg_hour() -> Arg {
    arg!(--hour <HOUR> "Use this local hour (0-23) instead of the current one")
        .value_parser(value_parser!(u8).range(0..24))
}

pub fn get_hour(matches: &ArgMatches) -> Option<u8> {
    matches.get_one("hour").copied()
}

pub fn arg_nusach() -> Arg {
    arg!(--nusach <NUSACH> "Liturgical custom, overrides the configured one")
        .value_parser(value_parser!(Nusach))
}

pub fn get_nusach(matches: &ArgMatches) -> Option<Nusach> {
    matches.get_one("nusach").copied()
}

/// Parses a `YYYY-MM-DD` date the same way stored dates of death are read.
pub fn parse_date(s: &str) -> Result<Date, String> {
    parse_calendar_date_string(s)
        .to_date()
        .ok_or_else(|| format!("Invalid date '{s}', expected YYYY-MM-DD"))
}
