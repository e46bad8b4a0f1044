//! Explicit test identity and artifact naming.
//!
//! The identity is passed by the caller rather than recovered from the
//! runtime's execution context, so there is no hidden global or reflective
//! state: a test names itself, and that name maps deterministically to the
//! pair of artifact paths it owns. Repeated runs of the same test always
//! reuse the same paths.

use std::fmt;
use std::path::{Path, PathBuf};

/// File suffix for the human-vetted baseline.
pub const APPROVED_SUFFIX: &str = ".approved.json";
/// File suffix for the latest unvetted output.
pub const RECEIVED_SUFFIX: &str = ".received.json";

/// Stable key associating snapshots with a specific test.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestIdentity {
    /// The suite (typically the calling module path) the test belongs to.
    pub suite: String,
    /// The test's own name within the suite.
    pub name: String,
}

impl TestIdentity {
    pub fn new(suite: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            name: name.into(),
        }
    }

    /// The filesystem-safe stem shared by this identity's artifacts:
    /// `<suite>.<name>` with anything outside `[A-Za-z0-9._-]` mapped to `_`.
    pub fn file_stem(&self) -> String {
        sanitize(&format!("{}.{}", self.suite, self.name))
    }

    /// Path of the approved baseline inside `dir`.
    pub fn approved_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}{}", self.file_stem(), APPROVED_SUFFIX))
    }

    /// Path of the received artifact inside `dir`.
    pub fn received_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}{}", self.file_stem(), RECEIVED_SUFFIX))
    }
}

impl fmt::Display for TestIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.suite, self.name)
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Builds a [`TestIdentity`] for the current module with the given test name.
///
/// ```
/// let id = verisnap::test_identity!("first_get");
/// assert_eq!(id.name, "first_get");
/// ```
#[macro_export]
macro_rules! test_identity {
    ($name:expr) => {
        $crate::identity::TestIdentity::new(module_path!(), $name)
    };
}
