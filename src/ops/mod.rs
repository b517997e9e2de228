//! High-level operations.
//!
//! This module contains the work behind the command-line subcommands:
//! loading manifests from disk or stdin and rendering the results.

pub mod load;
pub mod render;

pub use load::{load_manifest, tokenize_manifest, ManifestSource};
pub use render::{render_dependencies, render_package, render_tokens, OutputFormat};
