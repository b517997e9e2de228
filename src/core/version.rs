//! Dotted version numbers used as dependency bounds.
//!
//! Cabal versions are an arbitrary-length sequence of non-negative integers
//! (`0.0.0.2`, `4.12`, `5`). They compare component by component, so
//! `1.10 > 1.9`, and a shorter version sorts before any extension of it
//! (`3 < 3.0`).

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A dotted version number such as `4.12.0.1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionNumber {
    components: Vec<u64>,
}

/// Error returned when a string is not a dotted version number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{input}` is not a version number")]
pub struct InvalidVersionNumber {
    pub input: String,
}

impl VersionNumber {
    /// Create a version from its components.
    ///
    /// Returns `None` for an empty component list.
    pub fn new(components: impl Into<Vec<u64>>) -> Option<Self> {
        let components = components.into();
        if components.is_empty() {
            None
        } else {
            Some(VersionNumber { components })
        }
    }

    /// The numeric components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl FromStr for VersionNumber {
    type Err = InvalidVersionNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidVersionNumber {
            input: s.to_string(),
        };

        let components = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                part.parse::<u64>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;

        VersionNumber::new(components).ok_or_else(invalid)
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

impl Serialize for VersionNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionNumber {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(v("0.0.0.2").components(), &[0, 0, 0, 2]);
        assert_eq!(v("5").components(), &[5]);
        assert_eq!(v("4.12").components()[0], 4);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for input in ["", "1.", ".1", "1..2", "1.0-rc1", "v1", "-1", "+1", "1.x"] {
            assert!(input.parse::<VersionNumber>().is_err(), "{input}");
        }
    }

    #[test]
    fn test_ordering_is_component_wise() {
        assert!(v("1.10") > v("1.9"));
        assert!(v("2") > v("1.99.99"));
        assert!(v("3") < v("3.0"));
        assert!(v("3.0") < v("3.0.1"));
        assert_eq!(v("2.4"), v("2.4"));
    }

    #[test]
    fn test_display_round_trips_text() {
        assert_eq!(v("0.0.0.2").to_string(), "0.0.0.2");
        assert_eq!(v("10.02").to_string(), "10.2");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&v("1.2.3")).unwrap();
        assert_eq!(json, "\"1.2.3\"");
    }
}
