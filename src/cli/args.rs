//! Defines the command-line arguments and subcommands for the review CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::verifier::DEFAULT_ARTIFACT_DIR;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "verisnap",
    version,
    about = "Review and promote approval-test snapshot artifacts."
)]
pub struct VerisnapArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List received artifacts awaiting review.
    Pending {
        /// The artifact directory to scan.
        #[arg(long, default_value = DEFAULT_ARTIFACT_DIR)]
        dir: PathBuf,
    },
    /// Show a colored diff between the approved baseline and the received artifact.
    Diff {
        /// The artifact stem, e.g. `api_challenges.first_get`.
        stem: String,
        #[arg(long, default_value = DEFAULT_ARTIFACT_DIR)]
        dir: PathBuf,
    },
    /// Promote a received artifact to the approved baseline.
    Approve {
        /// The artifact stem to promote; omit with `--all` to promote everything.
        #[arg(required_unless_present = "all")]
        stem: Option<String>,
        /// Promote every pending received artifact.
        #[arg(long, conflicts_with = "stem")]
        all: bool,
        #[arg(long, default_value = DEFAULT_ARTIFACT_DIR)]
        dir: PathBuf,
    },
    /// Discard a received artifact.
    Reject {
        /// The artifact stem to discard.
        stem: String,
        #[arg(long, default_value = DEFAULT_ARTIFACT_DIR)]
        dir: PathBuf,
    },
}
