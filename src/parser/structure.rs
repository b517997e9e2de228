//! Structural parser: token sequence to [`PackageDescription`].
//!
//! Top-level keys are dispatched through [`PackageField`]. Each stanza kind
//! has its own property table; a stanza ends at the first key that is not in
//! its table, and that key is left for the top level to handle.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::core::dependency::Dependency;
use crate::core::manifest::{
    Executable, ExecutableField, Library, LibraryField, PackageDescription, PackageField,
    RepositoryField, SourceRepository, StanzaKind,
};
use crate::parser::cursor::TokenCursor;
use crate::parser::errors::{describe, ParseError};
use crate::parser::token::{Token, TokenKind};
use crate::parser::{DuplicateStanzaPolicy, ParseOptions};

/// Recursive-descent parser over a token sequence.
pub struct ManifestParser<'a> {
    cursor: TokenCursor<'a>,
    duplicates: DuplicateStanzaPolicy,
}

impl<'a> ManifestParser<'a> {
    pub fn new(tokens: &'a [Token], options: &ParseOptions) -> Self {
        ManifestParser {
            cursor: TokenCursor::new(tokens),
            duplicates: options.duplicate_stanzas,
        }
    }

    /// Consume every token and build the package description.
    pub fn parse(mut self) -> Result<PackageDescription, ParseError> {
        let mut pkg = PackageDescription::default();

        while let Some(token) = self.cursor.advance() {
            if !token.is_key() {
                return Err(ParseError::ExpectedKey {
                    found: describe(Some(token)),
                });
            }

            let key = token.text.as_str();
            let field = PackageField::lookup(key).ok_or_else(|| ParseError::UnsupportedProperty {
                key: key.to_string(),
            })?;

            match field {
                PackageField::Name => pkg.name = self.scalar(key)?,
                PackageField::Version => pkg.version = self.scalar(key)?,
                PackageField::SpecVersion => pkg.spec_version = self.scalar(key)?,
                PackageField::BuildType => pkg.build_type = self.scalar(key)?,
                PackageField::License => pkg.license = self.scalar(key)?,
                PackageField::LicenseFile => pkg.license_file = self.scalar(key)?,
                PackageField::Author => pkg.author = self.scalar(key)?,
                PackageField::Maintainer => pkg.maintainer = self.scalar(key)?,
                PackageField::Stability => pkg.stability = self.scalar(key)?,
                PackageField::Homepage => pkg.homepage = self.scalar(key)?,
                PackageField::PackageUrl => pkg.package_url = self.scalar(key)?,
                PackageField::BugReports => pkg.bug_reports = self.scalar(key)?,
                PackageField::Category => pkg.category = self.scalar(key)?,
                PackageField::TestedWith => pkg.tested_with = self.scalar(key)?,
                PackageField::Copyright => pkg.copyright.extend(self.lines(key)?),
                PackageField::Description => pkg.description.extend(self.lines(key)?),
                PackageField::Synopsis => pkg.synopsis.extend(self.lines(key)?),
                PackageField::ExtraSourceFiles => pkg.extra_source_files.extend(self.lines(key)?),
                PackageField::DataFiles => pkg.data_files.extend(self.lines(key)?),
                PackageField::Stanza(StanzaKind::SourceRepository) => {
                    let name = self.stanza_name(StanzaKind::SourceRepository)?;
                    let repo = self.source_repository()?;
                    self.insert(&mut pkg.repositories, StanzaKind::SourceRepository, name, repo)?;
                }
                PackageField::Stanza(StanzaKind::Executable) => {
                    let name = self.stanza_name(StanzaKind::Executable)?;
                    let exe = self.executable(&name)?;
                    self.insert(&mut pkg.executables, StanzaKind::Executable, name, exe)?;
                }
                PackageField::Stanza(StanzaKind::Library) => {
                    self.unnamed_stanza(StanzaKind::Library)?;
                    let lib = self.library()?;
                    if pkg.library.is_some() {
                        self.on_duplicate(StanzaKind::Library, "")?;
                    }
                    pkg.library = Some(lib);
                }
            }
        }

        tracing::debug!(
            "parsed package `{}` from {} tokens: {} repositories, {} executables, library: {}",
            pkg.name,
            self.cursor.position(),
            pkg.repositories.len(),
            pkg.executables.len(),
            pkg.library.is_some()
        );

        Ok(pkg)
    }

    /// A property with exactly one value token.
    fn scalar(&mut self, key: &str) -> Result<String, ParseError> {
        match self.cursor.advance() {
            Some(token) if token.is_value() => Ok(token.text.clone()),
            other => Err(ParseError::ExpectedValue {
                key: key.to_string(),
                found: describe(other),
            }),
        }
    }

    /// A property with one or more value tokens.
    fn lines(&mut self, key: &str) -> Result<Vec<String>, ParseError> {
        let mut lines = Vec::new();

        while let Some(token) = self.cursor.peek().filter(|t| t.is_value()) {
            lines.push(token.text.clone());
            self.cursor.advance();
        }

        if lines.is_empty() {
            return Err(ParseError::ExpectedValue {
                key: key.to_string(),
                found: describe(self.cursor.peek()),
            });
        }

        Ok(lines)
    }

    fn dependencies(&mut self, key: &str, component: &str) -> Result<Vec<Dependency>, ParseError> {
        self.lines(key)?
            .iter()
            .map(|raw| {
                Dependency::parse(raw).map_err(|source| ParseError::Dependency {
                    component: component.to_string(),
                    source,
                })
            })
            .collect()
    }

    fn stanza_name(&mut self, kind: StanzaKind) -> Result<String, ParseError> {
        match self.cursor.advance() {
            Some(token) if token.kind == TokenKind::ScopeName && !token.text.is_empty() => {
                Ok(token.text.clone())
            }
            other => Err(ParseError::ExpectedScopeName {
                stanza: kind,
                found: describe(other),
            }),
        }
    }

    fn unnamed_stanza(&mut self, kind: StanzaKind) -> Result<(), ParseError> {
        if let Some(token) = self.cursor.peek() {
            if token.kind == TokenKind::ScopeName {
                if !token.text.is_empty() {
                    return Err(ParseError::UnexpectedScopeName {
                        stanza: kind,
                        name: token.text.clone(),
                    });
                }
                // trailing whitespace after the keyword
                self.cursor.advance();
            }
        }
        Ok(())
    }

    /// Consume the next key if `lookup` recognizes it as a stanza property.
    ///
    /// Any other token, including a key of another stanza or a top-level
    /// key, ends the stanza and stays unconsumed.
    fn next_field<F>(&mut self, lookup: fn(&str) -> Option<F>) -> Option<(F, &'a str)> {
        let token = self.cursor.peek().filter(|t| t.is_key())?;
        let field = lookup(&token.text)?;
        self.cursor.advance();
        Some((field, token.text.as_str()))
    }

    fn source_repository(&mut self) -> Result<SourceRepository, ParseError> {
        let mut repo = SourceRepository::default();

        while let Some((field, key)) = self.next_field(RepositoryField::lookup) {
            match field {
                RepositoryField::Type => repo.kind = self.scalar(key)?,
                RepositoryField::Location => repo.location = self.scalar(key)?,
                RepositoryField::Tag => repo.tag = Some(self.scalar(key)?),
                RepositoryField::Branch => repo.branch = Some(self.scalar(key)?),
                RepositoryField::Subdir => repo.subdir = Some(self.scalar(key)?),
            }
        }

        Ok(repo)
    }

    fn executable(&mut self, name: &str) -> Result<Executable, ParseError> {
        let component = format!("executable {}", name);
        let mut exe = Executable::default();

        while let Some((field, key)) = self.next_field(ExecutableField::lookup) {
            match field {
                ExecutableField::BuildDepends => {
                    exe.build_depends.extend(self.dependencies(key, &component)?)
                }
                ExecutableField::Extensions => exe.extensions.extend(self.lines(key)?),
                ExecutableField::MainIs => exe.main_module = self.scalar(key)?,
                ExecutableField::OtherModules => exe.other_modules.extend(self.lines(key)?),
                ExecutableField::SourceDirs => exe.source_dirs.extend(self.lines(key)?),
                ExecutableField::GhcOptions => exe.ghc_options.extend(self.lines(key)?),
                ExecutableField::DefaultLanguage => {
                    exe.default_language = Some(self.scalar(key)?)
                }
            }
        }

        Ok(exe)
    }

    fn library(&mut self) -> Result<Library, ParseError> {
        let mut lib = Library::default();

        while let Some((field, key)) = self.next_field(LibraryField::lookup) {
            match field {
                LibraryField::BuildDepends => {
                    lib.build_depends.extend(self.dependencies(key, "library")?)
                }
                LibraryField::ExposedModules => lib.exposed_modules.extend(self.lines(key)?),
                LibraryField::OtherModules => lib.other_modules.extend(self.lines(key)?),
                LibraryField::SourceDirs => lib.source_dirs.extend(self.lines(key)?),
                LibraryField::Extensions => lib.extensions.extend(self.lines(key)?),
                LibraryField::GhcOptions => lib.ghc_options.extend(self.lines(key)?),
                LibraryField::DefaultLanguage => lib.default_language = Some(self.scalar(key)?),
            }
        }

        Ok(lib)
    }

    fn insert<T>(
        &self,
        map: &mut IndexMap<String, T>,
        kind: StanzaKind,
        name: String,
        stanza: T,
    ) -> Result<(), ParseError> {
        tracing::debug!("parsed {} stanza `{}`", kind, name);

        match map.entry(name) {
            Entry::Vacant(entry) => {
                entry.insert(stanza);
            }
            Entry::Occupied(mut entry) => {
                self.on_duplicate(kind, entry.key())?;
                // keeps the position of the first occurrence
                entry.insert(stanza);
            }
        }

        Ok(())
    }

    fn on_duplicate(&self, kind: StanzaKind, name: &str) -> Result<(), ParseError> {
        match self.duplicates {
            DuplicateStanzaPolicy::Reject => Err(ParseError::DuplicateStanza {
                stanza: kind,
                name: name.to_string(),
            }),
            DuplicateStanzaPolicy::Overwrite => {
                tracing::warn!("{} stanza `{}` replaces an earlier definition", kind, name);
                Ok(())
            }
        }
    }
}
