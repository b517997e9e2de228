//! cabal-manifest - A parser for Cabal package manifests
//!
//! This crate reads the indentation-sensitive `.cabal` manifest format into
//! a typed [`PackageDescription`], including the version bounds of every
//! `build-depends` entry.

pub mod core;
pub mod ops;
pub mod parser;
pub mod util;

/// Test utilities for the scanner and parser unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides token builders, manifest fixtures, and
/// readers with controlled failure modes.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    dependency::Dependency, manifest::PackageDescription, version::VersionNumber,
};

pub use parser::{
    parse_reader, parse_reader_with, parse_str, parse_tokens, tokenize, DuplicateStanzaPolicy,
    ParseError, ParseOptions,
};
pub use util::config::Config;
