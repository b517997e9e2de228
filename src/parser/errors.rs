//! Parse error types and diagnostics.

use std::io;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::dependency::DependencyError;
use crate::core::manifest::StanzaKind;
use crate::parser::token::Token;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while reading or parsing a manifest.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ParseError {
    /// The underlying stream failed.
    #[error(transparent)]
    #[diagnostic(code(cabal_manifest::io))]
    Io(#[from] io::Error),

    #[error("expected a property name, found {found}")]
    #[diagnostic(
        code(cabal_manifest::parse::expected_key),
        help("every top-level line must start with `Name:` or a stanza keyword")
    )]
    ExpectedKey { found: String },

    #[error("unsupported property: `{key}`")]
    #[diagnostic(code(cabal_manifest::parse::unsupported_property))]
    UnsupportedProperty { key: String },

    #[error("expected a value for `{key}`, found {found}")]
    #[diagnostic(code(cabal_manifest::parse::expected_value))]
    ExpectedValue { key: String, found: String },

    #[error("expected a name after `{stanza}`, found {found}")]
    #[diagnostic(
        code(cabal_manifest::parse::expected_scope_name),
        help("write the stanza name on the same line as its keyword")
    )]
    ExpectedScopeName { stanza: StanzaKind, found: String },

    #[error("`{stanza}` stanza does not take a name, found `{name}`")]
    #[diagnostic(code(cabal_manifest::parse::unexpected_scope_name))]
    UnexpectedScopeName { stanza: StanzaKind, name: String },

    #[error("duplicate {stanza} stanza{}", name_suffix(.name))]
    #[diagnostic(code(cabal_manifest::parse::duplicate_stanza))]
    DuplicateStanza { stanza: StanzaKind, name: String },

    #[error("invalid dependency in {component}")]
    #[diagnostic(code(cabal_manifest::parse::dependency))]
    Dependency {
        component: String,
        #[source]
        #[diagnostic_source]
        source: DependencyError,
    },
}

fn name_suffix(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!(" `{}`", name)
    }
}

/// Describe the token found where something else was expected.
pub(crate) fn describe(token: Option<&Token>) -> String {
    match token {
        Some(token) => format!("{} `{}`", token.kind, token.text),
        None => "end of input".to_string(),
    }
}

impl ParseError {
    /// Check if this is a stream failure rather than a grammar failure.
    pub fn is_io(&self) -> bool {
        matches!(self, ParseError::Io(_))
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Io(e) => Diagnostic::error(format!("failed to read manifest: {}", e)),

            ParseError::ExpectedKey { found } => {
                Diagnostic::error(format!("expected a property name, found {}", found))
                    .with_context("values must be indented under the property they belong to")
                    .with_suggestion(suggestions::INDENTATION)
            }

            ParseError::UnsupportedProperty { key } => {
                Diagnostic::error(format!("unsupported property `{}`", key))
                    .with_context("the property is not part of the supported field set")
                    .with_suggestion(suggestions::UNSUPPORTED_PROPERTY)
                    .with_suggestion(suggestions::INDENTATION)
            }

            ParseError::ExpectedValue { key, found } => {
                Diagnostic::error(format!("property `{}` has no value", key))
                    .with_context(format!("found {} instead", found))
                    .with_suggestion(format!("Write the value after `{}:`", key))
            }

            ParseError::ExpectedScopeName { stanza, found } => {
                Diagnostic::error(format!("`{}` stanza has no name", stanza))
                    .with_context(format!("found {} instead", found))
                    .with_suggestion(format!("Name the stanza: `{} <name>`", stanza))
            }

            ParseError::UnexpectedScopeName { stanza, name } => {
                Diagnostic::error(format!("`{}` stanza does not take a name", stanza))
                    .with_context(format!("found name `{}`", name))
                    .with_suggestion(format!("Write `{}` alone on its line", stanza))
            }

            ParseError::DuplicateStanza { stanza, name } => {
                Diagnostic::error(format!("duplicate {} stanza{}", stanza, name_suffix(name)))
                    .with_context("each stanza name may appear only once")
                    .with_suggestion("Merge the two stanzas or rename one of them")
                    .with_suggestion(suggestions::ALLOW_DUPLICATES)
            }

            ParseError::Dependency { component, source } => {
                Diagnostic::error(format!("invalid dependency in {}", component))
                    .with_context(source.to_string())
                    .with_suggestion(suggestions::DEPENDENCY_SYNTAX)
            }
        }
    }
}
