//! Core data structures.
//!
//! This module contains the types a parsed manifest is made of:
//! - Version numbers compared component-wise
//! - Dependencies and their version bounds
//! - The package description and its stanzas

pub mod dependency;
pub mod manifest;
pub mod version;

pub use dependency::{Dependency, DependencyError, Operator};
pub use manifest::{Executable, Library, PackageDescription, SourceRepository, StanzaKind};
pub use version::VersionNumber;
