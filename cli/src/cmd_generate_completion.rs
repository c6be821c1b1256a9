// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::generate;

use crate::Cli;

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate the luach completion script for a shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell to generate completions for")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let shell = matches
            .get_one::<Shell>("shell")
            .copied()
            .ok_or("Missing shell")?;
        Ok(Self { shell })
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.shell.write(&mut io::stdout());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// Writes the completion script for the whole `luach` command tree.
    pub fn write(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as Clap;

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        match self {
            Shell::Nushell => generate(clap_complete_nushell::Nushell {}, &mut cmd, name, buf),
            Shell::Bash => generate(Clap::Bash, &mut cmd, name, buf),
            Shell::Elvish => generate(Clap::Elvish, &mut cmd, name, buf),
            Shell::Fish => generate(Clap::Fish, &mut cmd, name, buf),
            Shell::PowerShell => generate(Clap::PowerShell, &mut cmd, name, buf),
            Shell::Zsh => generate(Clap::Zsh, &mut cmd, name, buf),
        }
    }
}
