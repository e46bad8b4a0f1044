//! The snapshot verifier: approved/received artifact lifecycle.
//!
//! Snapshots are explicit files, not hidden state. Each test identity owns
//! at most one approved baseline and one received artifact inside the
//! verifier's directory. Verification never mutates an approved file; only
//! a human (or the review CLI acting for one) promotes a received artifact.
//! A successful verification leaves no received artifact behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use difference::{Changeset, Difference};
use serde::Serialize;
use serde_json::Value;

use crate::canon;
use crate::errors::SnapError;
use crate::identity::TestIdentity;

/// Directory the test suites commit their baselines to.
pub const DEFAULT_ARTIFACT_DIR: &str = "tests/approvals";

/// Compares canonical snapshots against approved baselines on disk.
#[derive(Debug, Clone)]
pub struct Verifier {
    dir: PathBuf,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_DIR)
    }
}

impl Verifier {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The artifact directory this verifier reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Verify any serializable subject against the approved baseline for
    /// `identity`.
    ///
    /// Outcomes:
    /// - no baseline: the received artifact is written and
    ///   [`SnapError::NoBaseline`] is returned;
    /// - baseline matches: `Ok(())`, and any stale received artifact is
    ///   deleted;
    /// - baseline differs: the received artifact is (over)written and
    ///   [`SnapError::Mismatch`] carries a line diff plus both paths.
    pub fn verify<T: Serialize>(&self, identity: &TestIdentity, subject: &T) -> Result<(), SnapError> {
        let received_text = canon::to_canonical(subject)?;
        let approved_path = identity.approved_path(&self.dir);
        let received_path = identity.received_path(&self.dir);

        let approved_text = match fs::read_to_string(&approved_path) {
            Ok(text) => canon::normalize_newlines(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.write_received(&received_path, &received_text)?;
                return Err(SnapError::NoBaseline {
                    identity: identity.to_string(),
                    stem: identity.file_stem(),
                    received: received_path,
                });
            }
            Err(e) => return Err(SnapError::artifact(approved_path, e)),
        };

        if approved_text == received_text {
            remove_if_present(&received_path)?;
            return Ok(());
        }

        self.write_received(&received_path, &received_text)?;
        Err(SnapError::Mismatch {
            identity: identity.to_string(),
            diff: render_diff(&approved_text, &received_text),
            approved: approved_path,
            received: received_path,
        })
    }

    /// [`verify`](Self::verify) for an already-built JSON value.
    pub fn verify_json(&self, identity: &TestIdentity, value: &Value) -> Result<(), SnapError> {
        self.verify(identity, value)
    }

    fn write_received(&self, path: &Path, text: &str) -> Result<(), SnapError> {
        fs::create_dir_all(&self.dir).map_err(|e| SnapError::artifact(&self.dir, e))?;
        fs::write(path, text).map_err(|e| SnapError::artifact(path, e))
    }
}

/// Plain-text line diff of approved (`-`) versus received (`+`).
pub fn render_diff(approved: &str, received: &str) -> String {
    let changeset = Changeset::new(approved, received, "\n");
    let mut out = String::new();
    for diff in &changeset.diffs {
        let (prefix, text) = match diff {
            Difference::Same(x) => (' ', x),
            Difference::Rem(x) => ('-', x),
            Difference::Add(x) => ('+', x),
        };
        for line in text.lines() {
            out.push(prefix);
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn remove_if_present(path: &Path) -> Result<(), SnapError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SnapError::artifact(path, e)),
    }
}
