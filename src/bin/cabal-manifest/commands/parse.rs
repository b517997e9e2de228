//! `cabal-manifest parse` command

use anyhow::Result;

use crate::cli::ParseArgs;
use cabal_manifest::ops::{load_manifest, render_package, ManifestSource};
use cabal_manifest::util::Config;
use cabal_manifest::DuplicateStanzaPolicy;

pub fn execute(args: ParseArgs, config: &Config) -> Result<()> {
    let mut options = config.parse_options();
    if args.allow_duplicate_stanzas {
        options.duplicate_stanzas = DuplicateStanzaPolicy::Overwrite;
    }

    let format = args.format.or(config.output.format).unwrap_or_default();
    let source = ManifestSource::from_arg(&args.path);

    let pkg = load_manifest(&source, &options)?;
    let rendered = render_package(&pkg, format)?;

    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
