//! `cabal-manifest tokens` command

use anyhow::Result;

use crate::cli::TokensArgs;
use cabal_manifest::ops::{render_tokens, tokenize_manifest, ManifestSource};
use cabal_manifest::util::Config;

pub fn execute(args: TokensArgs, config: &Config) -> Result<()> {
    let source = ManifestSource::from_arg(&args.path);
    let tokens = tokenize_manifest(&source, &config.parse_options())?;

    print!("{}", render_tokens(&tokens));

    Ok(())
}
