//! `cabal-manifest completions` command

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let mut stdout = io::stdout().lock();

    generate(args.shell, &mut cmd, env!("CARGO_BIN_NAME"), &mut stdout);
    stdout.flush().context("failed to write completions")?;

    Ok(())
}
