//! Dependency specification.
//!
//! A Dependency is one entry of a `build-depends` list: a package name and
//! an optional version range built from `==`, `>`, `>=`, `<` and `<=`
//! constraints joined with `&&`.

use std::fmt;
use std::str::FromStr;

use miette::Diagnostic as MietteDiagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::core::version::VersionNumber;

/// Error while parsing a single dependency constraint string.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum DependencyError {
    #[error("empty dependency")]
    #[diagnostic(code(cabal_manifest::dependency::empty))]
    Empty,

    #[error("dependency `{dependency}` has no package name")]
    #[diagnostic(
        code(cabal_manifest::dependency::missing_name),
        help("a dependency starts with the package name, e.g. `base >= 4`")
    )]
    MissingName { dependency: String },

    #[error("unexpected token `{found}` in dependency `{dependency}`")]
    #[diagnostic(
        code(cabal_manifest::dependency::unexpected_operator),
        help("supported operators are ==, >, >=, < and <=, joined with &&")
    )]
    UnexpectedOperator { dependency: String, found: String },

    #[error("`{found}` is not a valid version in dependency `{dependency}`")]
    #[diagnostic(code(cabal_manifest::dependency::invalid_version))]
    InvalidVersion { dependency: String, found: String },

    #[error("operator `{operator}` is missing a version in dependency `{dependency}`")]
    #[diagnostic(code(cabal_manifest::dependency::missing_version))]
    MissingVersion { dependency: String, operator: String },

    #[error("dependency `{dependency}` declares both `>` and `>=`")]
    #[diagnostic(
        code(cabal_manifest::dependency::conflicting_bounds),
        help("keep a single lower bound")
    )]
    ConflictingLowerBounds { dependency: String },

    #[error("dependency `{dependency}` declares both `<` and `<=`")]
    #[diagnostic(
        code(cabal_manifest::dependency::conflicting_bounds),
        help("keep a single upper bound")
    )]
    ConflictingUpperBounds { dependency: String },

    #[error("dependency `{dependency}` repeats the `{operator}` bound")]
    #[diagnostic(code(cabal_manifest::dependency::duplicate_bound))]
    DuplicateBound { dependency: String, operator: String },
}

/// Comparison operator of a single version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Operator {
    /// Parse an operator token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "==" => Some(Operator::Eq),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Ge),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Le),
            _ => None,
        }
    }

    /// The operator as written in a manifest.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `build-depends` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Package name
    name: String,

    /// True when no bound is set
    is_latest: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    exact: Option<VersionNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    greater_than: Option<VersionNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    greater_or_equal: Option<VersionNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    less_than: Option<VersionNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    less_or_equal: Option<VersionNumber>,
}

impl Dependency {
    /// Create an unconstrained dependency.
    pub fn latest(name: impl Into<String>) -> Self {
        Dependency {
            name: name.into(),
            is_latest: true,
            exact: None,
            greater_than: None,
            greater_or_equal: None,
            less_than: None,
            less_or_equal: None,
        }
    }

    /// Parse a constraint string such as `base >= 3.0 && < 5`.
    pub fn parse(s: &str) -> Result<Self, DependencyError> {
        let mut chunks = split_constraint(s).into_iter();

        let name = chunks.next().ok_or(DependencyError::Empty)?;
        if name.starts_with(is_operator_char) {
            return Err(DependencyError::MissingName {
                dependency: s.to_string(),
            });
        }

        let mut dep = Dependency::latest(name);

        while let Some(chunk) = chunks.next() {
            if chunk == "&&" {
                continue;
            }

            let op = Operator::from_token(chunk).ok_or_else(|| {
                DependencyError::UnexpectedOperator {
                    dependency: s.to_string(),
                    found: chunk.to_string(),
                }
            })?;

            let bound = match chunks.next() {
                Some(text) if text != "&&" => {
                    text.parse::<VersionNumber>()
                        .map_err(|_| DependencyError::InvalidVersion {
                            dependency: s.to_string(),
                            found: text.to_string(),
                        })?
                }
                _ => {
                    return Err(DependencyError::MissingVersion {
                        dependency: s.to_string(),
                        operator: op.to_string(),
                    })
                }
            };

            let slot = match op {
                Operator::Eq => &mut dep.exact,
                Operator::Gt => &mut dep.greater_than,
                Operator::Ge => &mut dep.greater_or_equal,
                Operator::Lt => &mut dep.less_than,
                Operator::Le => &mut dep.less_or_equal,
            };
            if slot.is_some() {
                return Err(DependencyError::DuplicateBound {
                    dependency: s.to_string(),
                    operator: op.to_string(),
                });
            }
            *slot = Some(bound);
        }

        if dep.greater_than.is_some() && dep.greater_or_equal.is_some() {
            return Err(DependencyError::ConflictingLowerBounds {
                dependency: s.to_string(),
            });
        }
        if dep.less_than.is_some() && dep.less_or_equal.is_some() {
            return Err(DependencyError::ConflictingUpperBounds {
                dependency: s.to_string(),
            });
        }

        let is_latest = dep.bounds().next().is_none();
        dep.is_latest = is_latest;
        Ok(dep)
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the dependency is unconstrained.
    pub fn is_latest(&self) -> bool {
        self.is_latest
    }

    pub fn exact(&self) -> Option<&VersionNumber> {
        self.exact.as_ref()
    }

    pub fn greater_than(&self) -> Option<&VersionNumber> {
        self.greater_than.as_ref()
    }

    pub fn greater_or_equal(&self) -> Option<&VersionNumber> {
        self.greater_or_equal.as_ref()
    }

    pub fn less_than(&self) -> Option<&VersionNumber> {
        self.less_than.as_ref()
    }

    pub fn less_or_equal(&self) -> Option<&VersionNumber> {
        self.less_or_equal.as_ref()
    }

    /// Iterate over the set bounds, lower bounds first.
    pub fn bounds(&self) -> impl Iterator<Item = (Operator, &VersionNumber)> {
        [
            (Operator::Eq, &self.exact),
            (Operator::Gt, &self.greater_than),
            (Operator::Ge, &self.greater_or_equal),
            (Operator::Lt, &self.less_than),
            (Operator::Le, &self.less_or_equal),
        ]
        .into_iter()
        .filter_map(|(op, bound)| bound.as_ref().map(|v| (op, v)))
    }

    /// Check if a version satisfies every bound of this dependency.
    pub fn matches(&self, version: &VersionNumber) -> bool {
        self.bounds().all(|(op, bound)| match op {
            Operator::Eq => version == bound,
            Operator::Gt => version > bound,
            Operator::Ge => version >= bound,
            Operator::Lt => version < bound,
            Operator::Le => version <= bound,
        })
    }
}

impl FromStr for Dependency {
    type Err = DependencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dependency::parse(s)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (i, (op, bound)) in self.bounds().enumerate() {
            if i > 0 {
                write!(f, " &&")?;
            }
            write!(f, " {} {}", op, bound)?;
        }
        Ok(())
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '&' | '|' | '^' | '!')
}

/// Operators recognized inside a run of operator characters, longest first.
const GLUED_OPERATORS: &[&str] = &["&&", "==", ">=", "<=", ">", "<"];

/// Split a constraint into name, operator and version chunks.
///
/// Chunks are separated by whitespace, and an operator glued to a name or
/// version (`base>=4`, `<5`) is split off into its own chunk. A run of
/// operator characters is further split into known operators (`&&<` becomes
/// `&&` and `<`); an unknown remainder stays one chunk.
fn split_constraint(s: &str) -> Vec<&str> {
    let mut chunks = Vec::new();

    for word in s.split_whitespace() {
        let mut start = 0;
        let mut in_operator = None;

        for (i, c) in word.char_indices() {
            let op = is_operator_char(c);
            match in_operator {
                Some(prev) if prev != op => {
                    push_run(&mut chunks, &word[start..i], prev);
                    start = i;
                }
                _ => {}
            }
            in_operator = Some(op);
        }
        push_run(&mut chunks, &word[start..], in_operator.unwrap_or(false));
    }

    chunks
}

fn push_run<'a>(chunks: &mut Vec<&'a str>, run: &'a str, is_operator: bool) {
    if !is_operator {
        chunks.push(run);
        return;
    }

    let mut rest = run;
    while !rest.is_empty() {
        match GLUED_OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            Some(op) => {
                chunks.push(&rest[..op.len()]);
                rest = &rest[op.len()..];
            }
            None => {
                chunks.push(rest);
                break;
            }
        }
    }
}
