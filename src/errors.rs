//! Unified error type for snapshot verification and its collaborators.
//!
//! A missing baseline or a snapshot mismatch is a normal, recoverable test
//! failure; artifact IO faults and HTTP transport faults are fatal for the
//! invocation and are propagated, never masked. All variants render as
//! `miette` diagnostics, with promotion guidance attached where a human
//! action resolves the failure.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// All failure modes of the verifier and the HTTP collaborator seam.
#[derive(Debug, Error, Diagnostic)]
pub enum SnapError {
    /// No approved baseline exists for this test identity. The received
    /// artifact has been written and awaits human review.
    #[error("no approved baseline for '{identity}'")]
    #[diagnostic(
        code(verisnap::no_baseline),
        help("inspect {received:?} and run `verisnap approve {stem}` to promote it")
    )]
    NoBaseline {
        identity: String,
        stem: String,
        received: PathBuf,
    },

    /// The canonical form of the subject differs from the approved baseline.
    #[error("snapshot mismatch for '{identity}'\n{diff}")]
    #[diagnostic(
        code(verisnap::mismatch),
        help("compare {approved:?} with {received:?}; approve the received file if the change is intended")
    )]
    Mismatch {
        identity: String,
        approved: PathBuf,
        received: PathBuf,
        diff: String,
    },

    /// Reading, writing, renaming, or deleting an artifact failed.
    #[error("artifact io failure at {path:?}")]
    #[diagnostic(code(verisnap::artifact_io))]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP collaborator faulted: transport error, undecodable body, or
    /// an unscripted request hitting a test double.
    #[error("http collaborator failure for {url}: {reason}")]
    #[diagnostic(code(verisnap::http))]
    Http { url: String, reason: String },

    /// The subject could not be serialized to JSON.
    #[error("subject could not be canonicalized")]
    #[diagnostic(code(verisnap::canon))]
    Canon(#[from] serde_json::Error),
}

impl SnapError {
    /// Shorthand for HTTP collaborator failures.
    pub fn http(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Http {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for artifact IO failures.
    pub fn artifact(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Artifact {
            path: path.into(),
            source,
        }
    }

    /// True for the expected, human-recoverable test failures (missing
    /// baseline, mismatch) as opposed to fatal collaborator faults.
    pub fn is_snapshot_failure(&self) -> bool {
        matches!(self, Self::NoBaseline { .. } | Self::Mismatch { .. })
    }
}
