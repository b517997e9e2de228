//! `cabal-manifest deps` command

use anyhow::Result;

use crate::cli::DepsArgs;
use cabal_manifest::ops::{load_manifest, render_dependencies, ManifestSource};
use cabal_manifest::util::Config;
use cabal_manifest::DuplicateStanzaPolicy;

pub fn execute(args: DepsArgs, config: &Config) -> Result<()> {
    let mut options = config.parse_options();
    if args.allow_duplicate_stanzas {
        options.duplicate_stanzas = DuplicateStanzaPolicy::Overwrite;
    }

    let source = ManifestSource::from_arg(&args.path);
    let pkg = load_manifest(&source, &options)?;

    let rendered = render_dependencies(&pkg);
    if rendered.is_empty() {
        println!("{} declares no components", source);
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
