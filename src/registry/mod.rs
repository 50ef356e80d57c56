//! Library metadata registry.
//!
//! Models the set of libraries bundled into the deployed artifact as an
//! explicit value. Asking "which version of library X is active in this
//! process?" becomes a plain search over this registry, which keeps the
//! reporter pure and testable without a live runtime.

pub mod manifest;

use serde::{Deserialize, Serialize};

/// Metadata for one library bundled into the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// Namespaced library identifier (e.g. "software.amazon.awssdk").
    pub name: String,
    /// Implementation version, absent when the library shipped
    /// without version metadata.
    pub implementation_version: Option<String>,
}

impl LibraryEntry {
    /// Creates an entry from borrowed parts.
    pub fn new(name: &str, implementation_version: Option<&str>) -> Self {
        LibraryEntry {
            name: name.to_string(),
            implementation_version: implementation_version.map(str::to_string),
        }
    }
}

/// The set of library metadata entries known to the running artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRegistry {
    entries: Vec<LibraryEntry>,
}

impl LibraryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        LibraryRegistry::default()
    }

    /// Creates a registry from a prebuilt list of entries.
    pub fn from_entries(entries: Vec<LibraryEntry>) -> Self {
        LibraryRegistry { entries }
    }

    /// Adds an entry to the registry.
    pub fn insert(&mut self, entry: LibraryEntry) {
        self.entries.push(entry);
    }

    /// Finds the entry with the given name, if any.
    ///
    /// First match wins; at most one entry per name is expected.
    pub fn lookup(&self, name: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// All entries in the registry.
    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
