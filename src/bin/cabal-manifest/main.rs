//! cabal-manifest CLI - Inspect Cabal package manifests

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cabal_manifest::util::diagnostic::{self, suggestions, Diagnostic};
use cabal_manifest::ParseError;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && io::stderr().is_terminal();
    let manifest = cli.command.manifest_path().map(Path::to_path_buf);

    if let Err(e) = run(cli) {
        diagnostic::emit(&to_diagnostic(&e, manifest), color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("cabal_manifest=debug")
    } else {
        EnvFilter::new("cabal_manifest=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = commands::load_config(cli.config.as_deref());

    match cli.command {
        Commands::Parse(args) => commands::parse::execute(args, &config),
        Commands::Tokens(args) => commands::tokens::execute(args, &config),
        Commands::Deps(args) => commands::deps::execute(args, &config),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Prefer the parser's own diagnostic when the failure came from it.
fn to_diagnostic(err: &anyhow::Error, manifest: Option<PathBuf>) -> Diagnostic {
    let parse_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ParseError>())
        .filter(|e| !e.is_io());

    if let Some(parse_error) = parse_error {
        let diag = parse_error.to_diagnostic().with_context(err.to_string());
        return match manifest {
            Some(path) => diag.with_location(path),
            None => diag,
        };
    }

    let mut diag = Diagnostic::error(format!("{:#}", err));
    let not_found = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| e.kind() == io::ErrorKind::NotFound);
    if not_found {
        diag = diag.with_suggestion(suggestions::FILE_NOT_FOUND);
    }
    diag
}
