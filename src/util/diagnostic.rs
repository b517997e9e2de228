//! User-friendly diagnostic messages.
//!
//! Every reported failure carries what went wrong, the offending input, and
//! one or more suggested fixes.

use std::fmt;
use std::path::PathBuf;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion for values that ended up outside their property.
    pub const INDENTATION: &str =
        "Indent continuation lines and stanza properties with at least one space";

    /// Suggestion when a property is not recognized.
    pub const UNSUPPORTED_PROPERTY: &str =
        "Check the spelling, or move the property into the stanza it belongs to";

    /// Suggestion when a stanza name is repeated.
    pub const ALLOW_DUPLICATES: &str =
        "Pass `--allow-duplicate-stanzas` or set `parse.duplicate-stanzas = \"overwrite\"`";

    /// Suggestion for malformed dependency entries.
    pub const DEPENDENCY_SYNTAX: &str =
        "Write dependencies as `name`, `name >= 1.0` or `name >= 1.0 && < 2`";

    /// Suggestion when the manifest cannot be read.
    pub const FILE_NOT_FOUND: &str = "Pass the path to a `.cabal` file, or `-` to read stdin";
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Manifest the diagnostic refers to
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let error_prefix = if color {
            "\x1b[1;31merror\x1b[0m"
        } else {
            "error"
        };
        output.push_str(&format!("{}: {}\n", error_prefix, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  → {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help_prefix));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::error("unsupported property `Frobnicate`")
            .with_location("demo.cabal")
            .with_context("the property is not part of the supported field set")
            .with_suggestion(suggestions::UNSUPPORTED_PROPERTY)
            .with_suggestion(suggestions::INDENTATION);

        let output = diag.format(false);
        assert!(output.starts_with("error: unsupported property `Frobnicate`\n"));
        assert!(output.contains("  --> demo.cabal"));
        assert!(output.contains("  → the property is not part"));
        assert!(output.contains("help: consider:"));
        assert!(output.contains("1. Check the spelling"));
        assert!(output.contains("2. Indent continuation lines"));
    }

    #[test]
    fn test_plain_error_without_suggestions() {
        let diag = Diagnostic::error("no such file");
        let output = diag.format(false);
        assert_eq!(output, "error: no such file\n");
        assert_eq!(diag.to_string(), output);
    }

    #[test]
    fn test_colored_prefix() {
        let output = Diagnostic::error("boom").format(true);
        assert!(output.starts_with("\x1b[1;31merror\x1b[0m: boom"));
    }
}
