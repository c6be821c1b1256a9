// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal front-end of the luach memorial board.

mod board;
mod cli;
mod cmd_dashboard;
mod cmd_generate_completion;
mod cmd_migrate;
mod cmd_sizing;
mod cmd_today;
mod cmd_yahrzeit;
mod config;
mod table;
mod util;

pub use crate::board::Board;
pub use crate::cli::{Cli, Commands, run};
pub use crate::config::parse_config;
