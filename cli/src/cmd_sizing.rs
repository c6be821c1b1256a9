// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use luach_core::{SizingProfile, sizing_profile};

use crate::Board;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdSizing {
    pub cells: Option<u32>,
    pub output_format: ArgOutputFormat,
}

impl CmdSizing {
    pub const NAME: &str = "sizing";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the font and candle sizes for a memorial grid")
            .arg(
                arg!(--cells <CELLS> "Cells per page, defaults to the configured grid")
                    .value_parser(value_parser!(u32)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            cells: matches.get_one("cells").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, board: &Board) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "computing sizing profile...");
        let cells = self
            .cells
            .unwrap_or_else(|| board.config().display.total_cells());
        let profile = sizing_profile(cells);
        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
            ArgOutputFormat::Table => print_profile(cells, &profile),
        }
        Ok(())
    }
}

fn print_profile(cells: u32, profile: &SizingProfile) {
    let fonts = &profile.font_sizes;
    let candles = &profile.candle_sizes;
    println!("{} {} cells, x{}", "Scale:  ".bold(), cells, profile.scale_factor);
    println!(
        "{} name {:.1}, card name {:.1}, hebrew date {:.1}, tribute {:.1}, title {:.1}",
        "Fonts:  ".bold(),
        fonts.name,
        fonts.name_card,
        fonts.hebrew_date,
        fonts.tribute,
        fonts.title
    );
    println!(
        "{} simple {}px, card {}px, photo {}px",
        "Candles:".bold(),
        candles.simple,
        candles.card,
        candles.photo
    );
}
