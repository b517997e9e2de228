//! Manifest parsing.
//!
//! Parsing happens in two passes:
//! - [`scanner`] turns bytes into a flat [`Token`] sequence using indentation
//! - [`structure`] walks the tokens with a [`TokenCursor`] and builds a
//!   [`PackageDescription`]
//!
//! Dependency strings found in `build-depends` are handed to
//! [`Dependency::parse`](crate::core::dependency::Dependency::parse).

pub mod cursor;
pub mod errors;
pub mod scanner;
pub mod structure;
pub mod token;

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::core::manifest::PackageDescription;

pub use cursor::TokenCursor;
pub use errors::ParseError;
pub use scanner::{ScanState, Scanner, DEFAULT_READ_BUFFER_SIZE};
pub use structure::ManifestParser;
pub use token::{Token, TokenKind};

/// What to do when a stanza name appears twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateStanzaPolicy {
    /// Fail with [`ParseError::DuplicateStanza`]
    #[default]
    Reject,
    /// Keep the later stanza in the position of the first
    Overwrite,
}

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub duplicate_stanzas: DuplicateStanzaPolicy,
    pub read_buffer_size: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            duplicate_stanzas: DuplicateStanzaPolicy::default(),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

/// Scan a stream into tokens.
pub fn tokenize<R: Read>(reader: R, options: &ParseOptions) -> Result<Vec<Token>, ParseError> {
    let tokens = Scanner::new()
        .with_read_buffer_size(options.read_buffer_size)
        .scan(reader)?;
    Ok(tokens)
}

/// Build a package description from an already scanned token sequence.
pub fn parse_tokens(
    tokens: &[Token],
    options: &ParseOptions,
) -> Result<PackageDescription, ParseError> {
    ManifestParser::new(tokens, options).parse()
}

/// Parse a manifest stream with default options.
pub fn parse_reader<R: Read>(reader: R) -> Result<PackageDescription, ParseError> {
    parse_reader_with(reader, &ParseOptions::default())
}

/// Parse a manifest stream.
pub fn parse_reader_with<R: Read>(
    reader: R,
    options: &ParseOptions,
) -> Result<PackageDescription, ParseError> {
    let tokens = tokenize(reader, options)?;
    parse_tokens(&tokens, options)
}

/// Parse an in-memory manifest with default options.
pub fn parse_str(input: &str) -> Result<PackageDescription, ParseError> {
    parse_reader(input.as_bytes())
}
