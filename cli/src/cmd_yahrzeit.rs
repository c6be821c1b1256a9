// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error};

use clap::{ArgMatches, Command, arg, value_parser};
use colored::{Color, Colorize};
use jiff::civil::Date;
use luach_core::{
    DisplayMode, HebrewDate, HebrewDateOracle, MemorialRecord, cells_per_page, filter_by_month,
    months_match, paginate,
};

use crate::Board;
use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{ArgOutputFormat, arg_date, get_date};

#[derive(Debug, Clone, Copy)]
pub struct CmdYahrzeit {
    pub page: u32,
    pub all: bool,
    pub date: Option<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdYahrzeit {
    pub const NAME: &str = "yahrzeit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("y")
            .about("List the yahrzeits of the current Hebrew month, one board page at a time")
            .arg(
                arg!(-p --page <PAGE> "Page to show, starting at 1")
                    .value_parser(value_parser!(u32).range(1..))
                    .default_value("1"),
            )
            .arg(arg!(-a --all "Show every memorial record, not only this month's"))
            .arg(arg_date())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            page: matches.get_one("page").copied().unwrap_or(1),
            all: matches.get_flag("all"),
            date: get_date(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, board: &Board) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing yahrzeits...");
        let mode = match self.all {
            true => DisplayMode::All,
            false => board.config().display.mode,
        };
        let records = board.records().await?;
        Self::list(board, &records, self.date, mode, self.page, self.output_format);
        Ok(())
    }

    /// Prints one page of the records due on `date`.
    pub fn list(
        board: &Board,
        records: &[MemorialRecord],
        date: Option<Date>,
        mode: DisplayMode,
        page: u32,
        output_format: ArgOutputFormat,
    ) {
        let oracle = board.oracle(date);
        let today = oracle.current_hebrew_date();
        let display = board.config().display;

        let due = filter_by_month(&oracle, records, &today, mode);
        let count = due.len();
        let result = paginate(due, display.grid_rows, display.grid_columns);
        let cells = cells_per_page(display.grid_rows, display.grid_columns);
        let index = page.saturating_sub(1) as usize;

        let rows: Vec<_> = result
            .page(index, cells)
            .iter()
            .map(|record| YahrzeitRow::new(&oracle, record, &today))
            .collect();

        let columns = [
            YahrzeitColumn::Name,
            YahrzeitColumn::DateOfDeath,
            YahrzeitColumn::HebrewDate,
            YahrzeitColumn::Tribute,
        ];
        match output_format {
            ArgOutputFormat::Json => {
                println!("{}", Table::new(TableStyleJson::new(), &columns, &rows));
            }
            ArgOutputFormat::Table if result.total_pages == 0 => match mode {
                DisplayMode::All => println!("No memorial records"),
                DisplayMode::Monthly => println!("No yahrzeits in {}", today.month_name()),
            },
            ArgOutputFormat::Table if rows.is_empty() => println!(
                "Page {page} is out of range, there are {} pages",
                result.total_pages
            ),
            ArgOutputFormat::Table => {
                println!(
                    " {} {}",
                    "►".green(),
                    format!("Page {page}/{} ({count} records)", result.total_pages).italic()
                );
                println!("{}", Table::new(TableStyleBasic::new(), &columns, &rows));
            }
        }
    }
}

#[derive(Debug)]
struct YahrzeitRow<'a> {
    record: &'a MemorialRecord,
    hebrew: Option<HebrewDate>,
    is_today: bool,
}

impl<'a> YahrzeitRow<'a> {
    fn new(oracle: &impl HebrewDateOracle, record: &'a MemorialRecord, today: &HebrewDate) -> Self {
        let hebrew = record.death_date().map(|date| oracle.to_hebrew(date));
        let is_today = hebrew
            .as_ref()
            .is_some_and(|h| h.day == today.day && months_match(h, today));
        Self {
            record,
            hebrew,
            is_today,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum YahrzeitColumn {
    Name,
    DateOfDeath,
    HebrewDate,
    Tribute,
}

impl TableColumn<YahrzeitRow<'_>> for YahrzeitColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            YahrzeitColumn::Name => "Name",
            YahrzeitColumn::DateOfDeath => "Date of Death",
            YahrzeitColumn::HebrewDate => "Hebrew Date",
            YahrzeitColumn::Tribute => "Tribute",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a YahrzeitRow<'_>) -> Cow<'a, str> {
        match self {
            YahrzeitColumn::Name => data.record.name.as_str().into(),
            YahrzeitColumn::DateOfDeath => data.record.date_of_death.as_deref().unwrap_or("").into(),
            // Entered text wins over the computed date
            YahrzeitColumn::HebrewDate => match (&data.record.hebrew_date_of_death, &data.hebrew) {
                (Some(text), _) => text.as_str().into(),
                (None, Some(hebrew)) => hebrew.to_string().into(),
                (None, None) => "".into(),
            },
            YahrzeitColumn::Tribute => data.record.tribute.as_deref().unwrap_or("").into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            YahrzeitColumn::DateOfDeath => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &YahrzeitRow<'_>) -> Option<Color> {
        match self {
            YahrzeitColumn::Name | YahrzeitColumn::HebrewDate if data.is_today => {
                Some(Color::Yellow)
            }
            _ => None,
        }
    }
}
