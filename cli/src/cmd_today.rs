// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::civil::Date;
use luach_core::{
    CalendricalOracle, HebrewDateOracle, Nusach, SlichotContext, first_slichot_night,
    is_slichot_tonight,
};

use crate::Board;
use crate::util::{
    ArgOutputFormat, arg_date, arg_hour, arg_nusach, get_date, get_hour, get_nusach,
};

#[derive(Debug, Clone, Copy)]
pub struct CmdToday {
    pub date: Option<Date>,
    pub hour: Option<u8>,
    pub nusach: Option<Nusach>,
    pub output_format: ArgOutputFormat,
}

impl CmdToday {
    pub const NAME: &str = "today";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the Hebrew date and whether Slichot is said tonight")
            .arg(arg_date())
            .arg(arg_hour())
            .arg(arg_nusach())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: get_date(matches),
            hour: get_hour(matches),
            nusach: get_nusach(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, board: &Board) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing today...");
        let report = self.report(board);
        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            ArgOutputFormat::Table => report.print(),
        }
        Ok(())
    }

    pub fn report(self, board: &Board) -> TodayReport {
        let oracle = board.oracle(self.date);
        let nusach = self.nusach.unwrap_or(board.config().nusach);
        let today = oracle.current_hebrew_date();
        let ctx = SlichotContext::new(&today, board.hour(self.hour), nusach);

        TodayReport {
            gregorian: oracle.today(),
            hebrew: today.to_string(),
            nusach,
            slichot_tonight: is_slichot_tonight(&oracle, &ctx),
            first_slichot: first_slichot_date(&oracle, today.year, nusach),
        }
    }
}

/// What the board shows in its calendar header.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayReport {
    pub gregorian: Date,
    pub hebrew: String,
    pub nusach: Nusach,
    pub slichot_tonight: bool,
    pub first_slichot: Option<Date>,
}

impl TodayReport {
    pub fn print(&self) {
        println!("{} {}", "Gregorian:".bold(), self.gregorian);
        println!("{} {}", "Hebrew:   ".bold(), self.hebrew);
        let slichot = match self.slichot_tonight {
            true => "said tonight".green(),
            false => "not tonight".normal(),
        };
        println!("{} {}", "Slichot:  ".bold(), slichot);
        if let Some(first) = self.first_slichot {
            println!("{} {} ({:?})", "First:    ".bold(), first, self.nusach);
        }
    }
}

/// The evening Slichot first starts in the Elul of `year`.
fn first_slichot_date(oracle: &CalendricalOracle, year: i32, nusach: Nusach) -> Option<Date> {
    oracle.absolute_to_gregorian(first_slichot_night(oracle, year, nusach))
}
