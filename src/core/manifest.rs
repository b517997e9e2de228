//! Package description schema.
//!
//! The package description is the structured form of a `.cabal` manifest:
//! identity metadata, free-form text fields, and the source-repository,
//! executable and library stanzas.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::dependency::Dependency;

/// The kind of an indented stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StanzaKind {
    SourceRepository,
    Executable,
    Library,
}

impl StanzaKind {
    /// The keyword that opens this stanza.
    pub fn keyword(&self) -> &'static str {
        match self {
            StanzaKind::SourceRepository => "source-repository",
            StanzaKind::Executable => "executable",
            StanzaKind::Library => "library",
        }
    }

}

impl fmt::Display for StanzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A property of a `source-repository` stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryField {
    Type,
    Location,
    Tag,
    Branch,
    Subdir,
}

const REPOSITORY_FIELDS: &[(&str, RepositoryField)] = &[
    ("type", RepositoryField::Type),
    ("location", RepositoryField::Location),
    ("tag", RepositoryField::Tag),
    ("branch", RepositoryField::Branch),
    ("subdir", RepositoryField::Subdir),
];

impl RepositoryField {
    pub fn lookup(key: &str) -> Option<Self> {
        lookup(REPOSITORY_FIELDS, key)
    }
}

/// A property of an `executable` stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutableField {
    BuildDepends,
    Extensions,
    MainIs,
    OtherModules,
    SourceDirs,
    GhcOptions,
    DefaultLanguage,
}

const EXECUTABLE_FIELDS: &[(&str, ExecutableField)] = &[
    ("build-depends", ExecutableField::BuildDepends),
    ("extensions", ExecutableField::Extensions),
    ("default-extensions", ExecutableField::Extensions),
    ("main-is", ExecutableField::MainIs),
    ("other-modules", ExecutableField::OtherModules),
    ("hs-source-dirs", ExecutableField::SourceDirs),
    ("ghc-options", ExecutableField::GhcOptions),
    ("default-language", ExecutableField::DefaultLanguage),
];

impl ExecutableField {
    pub fn lookup(key: &str) -> Option<Self> {
        lookup(EXECUTABLE_FIELDS, key)
    }
}

/// A property of the `library` stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryField {
    BuildDepends,
    ExposedModules,
    OtherModules,
    SourceDirs,
    Extensions,
    GhcOptions,
    DefaultLanguage,
}

const LIBRARY_FIELDS: &[(&str, LibraryField)] = &[
    ("build-depends", LibraryField::BuildDepends),
    ("exposed-modules", LibraryField::ExposedModules),
    ("other-modules", LibraryField::OtherModules),
    ("hs-source-dirs", LibraryField::SourceDirs),
    ("extensions", LibraryField::Extensions),
    ("default-extensions", LibraryField::Extensions),
    ("ghc-options", LibraryField::GhcOptions),
    ("default-language", LibraryField::DefaultLanguage),
];

impl LibraryField {
    pub fn lookup(key: &str) -> Option<Self> {
        lookup(LIBRARY_FIELDS, key)
    }
}

/// A top-level property of the package description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageField {
    Name,
    Version,
    SpecVersion,
    BuildType,
    License,
    LicenseFile,
    Author,
    Maintainer,
    Stability,
    Homepage,
    PackageUrl,
    BugReports,
    Category,
    TestedWith,
    Copyright,
    Description,
    Synopsis,
    ExtraSourceFiles,
    DataFiles,
    Stanza(StanzaKind),
}

const PACKAGE_FIELDS: &[(&str, PackageField)] = &[
    ("name", PackageField::Name),
    ("version", PackageField::Version),
    ("cabal-version", PackageField::SpecVersion),
    ("build-type", PackageField::BuildType),
    ("license", PackageField::License),
    ("license-file", PackageField::LicenseFile),
    ("author", PackageField::Author),
    ("maintainer", PackageField::Maintainer),
    ("stability", PackageField::Stability),
    ("homepage", PackageField::Homepage),
    ("package-url", PackageField::PackageUrl),
    ("bug-reports", PackageField::BugReports),
    ("category", PackageField::Category),
    ("tested-with", PackageField::TestedWith),
    ("copyright", PackageField::Copyright),
    ("description", PackageField::Description),
    ("synopsis", PackageField::Synopsis),
    ("extra-source-files", PackageField::ExtraSourceFiles),
    ("data-files", PackageField::DataFiles),
    (
        "source-repository",
        PackageField::Stanza(StanzaKind::SourceRepository),
    ),
    ("executable", PackageField::Stanza(StanzaKind::Executable)),
    ("library", PackageField::Stanza(StanzaKind::Library)),
];

impl PackageField {
    /// Look up a top-level property (case-insensitive).
    pub fn lookup(key: &str) -> Option<Self> {
        lookup(PACKAGE_FIELDS, key)
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|&(_, field)| field)
}

/// A `source-repository` stanza.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceRepository {
    /// Version control system (`darcs`, `git`, ...)
    pub kind: String,

    pub location: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdir: Option<String>,
}

/// An `executable` stanza.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Executable {
    pub build_depends: Vec<Dependency>,
    pub extensions: Vec<String>,

    /// The `main-is` module file
    pub main_module: String,

    pub other_modules: Vec<String>,

    /// `hs-source-dirs` entries
    pub source_dirs: Vec<String>,

    pub ghc_options: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
}

/// The `library` stanza.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Library {
    pub build_depends: Vec<Dependency>,
    pub exposed_modules: Vec<String>,
    pub other_modules: Vec<String>,
    pub source_dirs: Vec<String>,
    pub extensions: Vec<String>,
    pub ghc_options: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
}

/// The parsed package description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageDescription {
    pub name: String,
    pub version: String,

    /// The `cabal-version` field
    pub spec_version: String,

    pub build_type: String,
    pub license: String,
    pub license_file: String,
    pub author: String,
    pub maintainer: String,
    pub stability: String,
    pub homepage: String,
    pub package_url: String,
    pub bug_reports: String,
    pub category: String,
    pub tested_with: String,

    pub copyright: Vec<String>,
    pub description: Vec<String>,
    pub synopsis: Vec<String>,
    pub extra_source_files: Vec<String>,
    pub data_files: Vec<String>,

    /// Source repositories keyed by stanza name (`head`, `this`)
    pub repositories: IndexMap<String, SourceRepository>,

    /// Executables keyed by stanza name
    pub executables: IndexMap<String, Executable>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<Library>,
}

impl PackageDescription {
    /// Get an executable by name.
    pub fn executable(&self, name: &str) -> Option<&Executable> {
        self.executables.get(name)
    }

    /// Get a source repository by name.
    pub fn repository(&self, name: &str) -> Option<&SourceRepository> {
        self.repositories.get(name)
    }

    /// All dependencies grouped by component, library first.
    ///
    /// The library component is labelled `library`; executables use
    /// `executable <name>`.
    pub fn components(&self) -> Vec<(String, &[Dependency])> {
        let mut components = Vec::new();

        if let Some(ref lib) = self.library {
            components.push(("library".to_string(), lib.build_depends.as_slice()));
        }
        for (name, exe) in &self.executables {
            components.push((format!("executable {}", name), exe.build_depends.as_slice()));
        }

        components
    }
}
