// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::Board;
use crate::cmd_today::CmdToday;
use crate::cmd_yahrzeit::CmdYahrzeit;
use crate::util::ArgOutputFormat;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dashboard, which includes today's Hebrew date and this month's yahrzeits")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Show the calendar header and the first page of yahrzeits.
    pub async fn run(self, board: &Board) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        println!("🗓️ {}", "Today".bold());
        let today = CmdToday {
            date: None,
            hour: None,
            nusach: None,
            output_format: ArgOutputFormat::Table,
        };
        today.report(board).print();
        println!();

        println!("🕯️ {}", "Yahrzeits".bold());
        let records = board.records().await?;
        let mode = board.config().display.mode;
        CmdYahrzeit::list(board, &records, None, mode, 1, ArgOutputFormat::Table);
        Ok(())
    }
}
