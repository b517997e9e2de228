//! Reading manifests from files or stdin.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::manifest::PackageDescription;
use crate::parser::{self, ParseOptions, Token};

/// Where a manifest is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Stdin,
    Path(PathBuf),
}

impl ManifestSource {
    /// Interpret a command-line argument; `-` means stdin.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            ManifestSource::Stdin
        } else {
            ManifestSource::Path(arg.to_path_buf())
        }
    }

    /// Open the source for reading.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            ManifestSource::Stdin => Ok(Box::new(io::stdin().lock())),
            ManifestSource::Path(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open manifest: {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestSource::Stdin => write!(f, "<stdin>"),
            ManifestSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Scan a manifest into its token sequence.
pub fn tokenize_manifest(source: &ManifestSource, options: &ParseOptions) -> Result<Vec<Token>> {
    let reader = source.open()?;
    let tokens = parser::tokenize(reader, options)
        .with_context(|| format!("failed to read manifest: {}", source))?;

    tracing::debug!("{}: {} tokens", source, tokens.len());
    Ok(tokens)
}

/// Read and parse a manifest.
pub fn load_manifest(
    source: &ManifestSource,
    options: &ParseOptions,
) -> Result<PackageDescription> {
    let reader = source.open()?;
    parser::parse_reader_with(reader, options)
        .with_context(|| format!("failed to parse manifest: {}", source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseError;
    use crate::test_support::FULL_MANIFEST;
    use tempfile::TempDir;

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(ManifestSource::from_arg(Path::new("-")), ManifestSource::Stdin);
        assert_eq!(
            ManifestSource::from_arg(Path::new("foo.cabal")),
            ManifestSource::Path(PathBuf::from("foo.cabal"))
        );
        assert_eq!(ManifestSource::Stdin.to_string(), "<stdin>");
    }

    #[test]
    fn test_load_manifest_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("demo.cabal");
        std::fs::write(&path, FULL_MANIFEST).unwrap();

        let source = ManifestSource::Path(path);
        let pkg = load_manifest(&source, &ParseOptions::default()).unwrap();
        assert_eq!(pkg.name, "3d-graphics-examples");

        let tokens = tokenize_manifest(&source, &ParseOptions::default()).unwrap();
        assert_eq!(tokens.first(), Some(&Token::key("Name")));
    }

    #[test]
    fn test_missing_file_names_path() {
        let tmp = TempDir::new().unwrap();
        let source = ManifestSource::Path(tmp.path().join("absent.cabal"));

        let err = load_manifest(&source, &ParseOptions::default()).unwrap_err();
        assert!(err.to_string().contains("absent.cabal"));
    }

    #[test]
    fn test_parse_error_stays_in_chain() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.cabal");
        std::fs::write(&path, "Frobnicate: yes\n").unwrap();

        let err = load_manifest(&ManifestSource::Path(path), &ParseOptions::default())
            .unwrap_err();
        let parse_err = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<ParseError>())
            .unwrap();
        assert!(matches!(parse_err, ParseError::UnsupportedProperty { .. }));
    }
}
