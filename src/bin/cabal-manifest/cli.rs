//! CLI definitions using clap.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use cabal_manifest::ops::OutputFormat;

/// cabal-manifest - Inspect Cabal package manifests
#[derive(Parser)]
#[command(name = "cabal-manifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of `.cabal-manifest/config.toml`
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a manifest and print the package description
    Parse(ParseArgs),

    /// Print the token sequence of a manifest
    Tokens(TokensArgs),

    /// List the dependencies of every component
    Deps(DepsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// The manifest a command reads, unless it reads stdin.
    pub fn manifest_path(&self) -> Option<&Path> {
        let path = match self {
            Commands::Parse(args) => &args.path,
            Commands::Tokens(args) => &args.path,
            Commands::Deps(args) => &args.path,
            Commands::Completions(_) => return None,
        };
        (path.as_os_str() != "-").then_some(path.as_path())
    }
}

#[derive(Args)]
pub struct ParseArgs {
    /// Manifest to read (`-` for stdin)
    pub path: PathBuf,

    /// Output format (summary, json, debug)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Let a repeated stanza replace the earlier one
    #[arg(long)]
    pub allow_duplicate_stanzas: bool,
}

#[derive(Args)]
pub struct TokensArgs {
    /// Manifest to read (`-` for stdin)
    pub path: PathBuf,
}

#[derive(Args)]
pub struct DepsArgs {
    /// Manifest to read (`-` for stdin)
    pub path: PathBuf,

    /// Let a repeated stanza replace the earlier one
    #[arg(long)]
    pub allow_duplicate_stanzas: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
