//! Version reporter — the single diagnostic operation of this service.
//!
//! Looks up one target library in a registry and produces the one-entry
//! mapping the invocation returns. Success is all-or-nothing: either the
//! target's version is found, or the whole invocation fails.

use std::collections::HashMap;

use thiserror::Error;

use crate::registry::manifest::AWS_SDK_PACKAGE;
use crate::registry::LibraryRegistry;

/// Key of the single entry in a successful report.
pub const VERSION_KEY: &str = "version";

/// The target library is absent from the registry or carries no version
/// metadata. The two cases are deliberately indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{library} version not found in the bundled library manifest")]
pub struct VersionNotFound {
    /// The library identifier that was searched for.
    pub library: String,
}

/// Reports the implementation version of one target library.
#[derive(Debug, Clone)]
pub struct VersionReporter {
    target: String,
}

impl Default for VersionReporter {
    fn default() -> Self {
        VersionReporter::new(AWS_SDK_PACKAGE)
    }
}

impl VersionReporter {
    /// Creates a reporter targeting the given library identifier.
    pub fn new(target: &str) -> Self {
        VersionReporter {
            target: target.to_string(),
        }
    }

    /// The library identifier this reporter searches for.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Looks up the target library and returns `{"version": <V>}`.
    ///
    /// The result depends only on the registry contents. Fails when the
    /// target is absent or has no recorded implementation version; no
    /// partial or default result is ever returned.
    pub fn report(
        &self,
        registry: &LibraryRegistry,
    ) -> Result<HashMap<String, String>, VersionNotFound> {
        let version = registry
            .lookup(&self.target)
            .and_then(|entry| entry.implementation_version.clone())
            .ok_or_else(|| VersionNotFound {
                library: self.target.clone(),
            })?;

        let mut report = HashMap::with_capacity(1);
        report.insert(VERSION_KEY.to_string(), version);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LibraryEntry;

    fn registry_of(entries: Vec<LibraryEntry>) -> LibraryRegistry {
        LibraryRegistry::from_entries(entries)
    }

    #[test]
    fn test_reports_version_when_sdk_is_present() {
        let registry = registry_of(vec![LibraryEntry::new(AWS_SDK_PACKAGE, Some("2.20.1"))]);

        let report = VersionReporter::default()
            .report(&registry)
            .expect("lookup should succeed");

        assert_eq!(report.len(), 1, "report must have exactly one entry");
        assert_eq!(report.get(VERSION_KEY).map(String::as_str), Some("2.20.1"));
    }

    #[test]
    fn test_fails_on_empty_registry() {
        let registry = registry_of(vec![]);

        let err = VersionReporter::default()
            .report(&registry)
            .expect_err("empty registry must fail");

        assert_eq!(err.library, AWS_SDK_PACKAGE);
    }

    #[test]
    fn test_fails_when_sdk_has_no_version_metadata() {
        let registry = registry_of(vec![LibraryEntry::new(AWS_SDK_PACKAGE, None)]);

        let err = VersionReporter::default()
            .report(&registry)
            .expect_err("versionless entry must fail");

        assert_eq!(err.library, AWS_SDK_PACKAGE);
    }

    #[test]
    fn test_fails_when_only_other_libraries_are_present() {
        let registry = registry_of(vec![LibraryEntry::new("other.lib", Some("1.0"))]);

        let result = VersionReporter::default().report(&registry);
        assert!(result.is_err(), "non-matching entries must not satisfy the lookup");
    }

    #[test]
    fn test_skips_non_matching_entries_before_the_target() {
        let registry = registry_of(vec![
            LibraryEntry::new("other.lib", Some("1.0")),
            LibraryEntry::new(AWS_SDK_PACKAGE, Some("2.20.1")),
        ]);

        let report = VersionReporter::default()
            .report(&registry)
            .expect("lookup should succeed");

        assert_eq!(report.get(VERSION_KEY).map(String::as_str), Some("2.20.1"));
    }

    #[test]
    fn test_repeated_reports_are_identical() {
        let registry = registry_of(vec![LibraryEntry::new(AWS_SDK_PACKAGE, Some("2.20.1"))]);
        let reporter = VersionReporter::default();

        let first = reporter.report(&registry);
        let second = reporter.report(&registry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_target_is_configurable() {
        let registry = registry_of(vec![LibraryEntry::new("custom.sdk", Some("0.9.3"))]);

        let report = VersionReporter::new("custom.sdk")
            .report(&registry)
            .expect("lookup should succeed");

        assert_eq!(report.get(VERSION_KEY).map(String::as_str), Some("0.9.3"));
    }

    #[test]
    fn test_error_message_names_the_missing_library() {
        let err = VersionReporter::default()
            .report(&registry_of(vec![]))
            .expect_err("empty registry must fail");

        assert!(err.to_string().contains(AWS_SDK_PACKAGE));
    }
}
