//! Text renderings of parsed manifests.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::dependency::Dependency;
use crate::core::manifest::PackageDescription;
use crate::parser::Token;

/// Output format of the `parse` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable overview
    #[default]
    Summary,
    /// The full record as pretty-printed JSON
    Json,
    /// Rust debug representation
    Debug,
}

impl FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            "debug" => Ok(OutputFormat::Debug),
            _ => Err(OutputFormatParseError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Summary => write!(f, "summary"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Debug => write!(f, "debug"),
        }
    }
}

/// Error returned when parsing an invalid output format.
#[derive(Debug, Clone, Error)]
#[error("unknown output format `{0}` (expected summary, json or debug)")]
pub struct OutputFormatParseError(pub String);

/// Render a package description in the given format.
pub fn render_package(pkg: &PackageDescription, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Summary => Ok(summary(pkg)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(pkg).context("failed to serialize package description")
        }
        OutputFormat::Debug => Ok(format!("{:#?}", pkg)),
    }
}

fn summary(pkg: &PackageDescription) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", display_or_unset(&pkg.name), pkg.version);
    for (label, value) in [
        ("cabal-version", &pkg.spec_version),
        ("build-type", &pkg.build_type),
        ("license", &pkg.license),
        ("author", &pkg.author),
        ("maintainer", &pkg.maintainer),
        ("homepage", &pkg.homepage),
        ("category", &pkg.category),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "  {:<14} {}", label, value);
        }
    }
    if let Some(line) = pkg.synopsis.first() {
        let _ = writeln!(out, "  {:<14} {}", "synopsis", line);
    }

    for (name, repo) in &pkg.repositories {
        let _ = write!(out, "source-repository {}: {} {}", name, repo.kind, repo.location);
        if let Some(ref tag) = repo.tag {
            let _ = write!(out, " (tag {})", tag);
        }
        out.push('\n');
    }

    if let Some(ref lib) = pkg.library {
        let _ = writeln!(
            out,
            "library: {} exposed modules, {} dependencies",
            lib.exposed_modules.len(),
            lib.build_depends.len()
        );
    }

    for (name, exe) in &pkg.executables {
        let _ = writeln!(
            out,
            "executable {}: {}, {} dependencies",
            name,
            display_or_unset(&exe.main_module),
            exe.build_depends.len()
        );
    }

    out
}

fn display_or_unset(s: &str) -> &str {
    if s.is_empty() {
        "<unset>"
    } else {
        s
    }
}

/// Render every component's dependencies, one per line.
pub fn render_dependencies(pkg: &PackageDescription) -> String {
    let mut out = String::new();

    for (component, deps) in pkg.components() {
        let _ = writeln!(out, "{}:", component);
        if deps.is_empty() {
            out.push_str("  (none)\n");
        }
        for dep in deps {
            let _ = writeln!(out, "  {}", describe_dependency(dep));
        }
    }

    out
}

fn describe_dependency(dep: &Dependency) -> String {
    if dep.is_latest() {
        format!("{} (any version)", dep.name())
    } else {
        dep.to_string()
    }
}

/// Render a token sequence, one `[Kind: text]` per line.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{}", token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use crate::test_support::{key, scope, value, FULL_MANIFEST, LIBRARY_MANIFEST};

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "summary".parse::<OutputFormat>().unwrap(),
            OutputFormat::Summary
        );
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Debug.to_string(), "debug");
    }

    #[test]
    fn test_summary_lists_stanzas() {
        let pkg = parse_str(FULL_MANIFEST).unwrap();
        let out = render_package(&pkg, OutputFormat::Summary).unwrap();

        assert!(out.starts_with("3d-graphics-examples 0.0.0.2\n"));
        assert!(out
            .lines()
            .any(|l| l.trim_start().starts_with("license") && l.ends_with(" BSD3")));
        assert!(out.contains("source-repository this: darcs"));
        assert!(out.contains("(tag 3d-graphics-examples-0.0.0.2)"));
        assert!(out.contains("executable mountains: Mountains.hs, 4 dependencies"));
        assert!(out.contains("executable l-systems: LSystems.hs, 3 dependencies"));
    }

    #[test]
    fn test_json_output() {
        let pkg = parse_str(LIBRARY_MANIFEST).unwrap();
        let out = render_package(&pkg, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["name"], "text-utils");
        assert_eq!(json["library"]["exposed_modules"][0], "Data.Text.Utils");
        assert_eq!(json["library"]["build_depends"][0]["name"], "base");
        assert_eq!(json["library"]["build_depends"][0]["greater_or_equal"], "4.9");
        assert_eq!(json["library"]["build_depends"][2]["is_latest"], true);
    }

    #[test]
    fn test_render_dependencies() {
        let pkg = parse_str(LIBRARY_MANIFEST).unwrap();
        let out = render_dependencies(&pkg);
        assert_eq!(
            out,
            "library:\n  base >= 4.9 && < 5\n  text == 1.2.3\n  containers (any version)\n"
        );
    }

    #[test]
    fn test_render_tokens() {
        let out = render_tokens(&[key("Executable"), scope("foo"), value("x")]);
        assert_eq!(out, "[Key: Executable]\n[ScopeName: foo]\n[Value: x]\n");
    }
}
