// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use luach_core::MemorialStore;

use crate::Board;

#[derive(Debug, Clone, Copy)]
pub struct CmdMigrate {
    pub dry_run: bool,
}

impl CmdMigrate {
    pub const NAME: &str = "migrate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Rewrite the memorial store in the current layout")
            .arg(arg!(--"dry-run" "Print the migrated store instead of writing it"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            dry_run: matches.get_flag("dry-run"),
        }
    }

    pub async fn run(self, board: &Board) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "migrating memorial store...");
        let path = board.records_path()?;
        let store = MemorialStore::load(path).await?;
        if self.dry_run {
            println!("{}", store.to_json()?);
            return Ok(());
        }

        store.save(path).await?;
        println!(
            "{} {} records written to {}",
            "Migrated:".green(),
            store.records.len(),
            path.display()
        );
        Ok(())
    }
}
