//! Build-time manifest of libraries bundled into this artifact.
//!
//! The deployed binary has no live reflection over its dependencies, so the
//! registry is assembled from metadata embedded at compile time. The AWS SDK
//! version is injected through the `AWS_SDK_VERSION` build environment
//! variable; a build without it yields an entry with no version, which the
//! reporter treats the same as a missing library.

use super::{LibraryEntry, LibraryRegistry};

/// Namespaced identifier of the AWS SDK package this deployment reports on.
pub const AWS_SDK_PACKAGE: &str = "software.amazon.awssdk";

/// Version of the bundled AWS SDK, captured at build time.
const AWS_SDK_VERSION: Option<&str> = option_env!("AWS_SDK_VERSION");

/// Returns the registry of libraries compiled into the running artifact.
pub fn runtime_registry() -> LibraryRegistry {
    LibraryRegistry::from_entries(vec![
        LibraryEntry::new(AWS_SDK_PACKAGE, AWS_SDK_VERSION),
        LibraryEntry::new(env!("CARGO_PKG_NAME"), Some(crate::version())),
    ])
}
