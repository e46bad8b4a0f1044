//! The verisnap command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the artifact review workflow: listing pending received artifacts, diffing
//! them against their baselines, and promoting or discarding them.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use walkdir::WalkDir;

use crate::canon;
use crate::cli::args::{Command, VerisnapArgs};
use crate::errors::SnapError;
use crate::identity::{APPROVED_SUFFIX, RECEIVED_SUFFIX};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = VerisnapArgs::parse();

    let result = match args.command {
        Command::Pending { dir } => handle_pending(&dir),
        Command::Diff { stem, dir } => handle_diff(&stem, &dir),
        Command::Approve { stem, all, dir } => handle_approve(stem.as_deref(), all, &dir),
        Command::Reject { stem, dir } => handle_reject(&stem, &dir),
    };

    if let Err(error) = result {
        let report = miette::Report::new(error);
        eprintln!("{:?}", report);
        process::exit(1);
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn handle_pending(dir: &Path) -> Result<(), SnapError> {
    let pending = pending_stems(dir)?;
    if pending.is_empty() {
        println!("no received artifacts in {}", dir.display());
        return Ok(());
    }
    for stem in &pending {
        let has_baseline = approved_path(dir, stem).exists();
        output::print_pending_entry(stem, has_baseline);
    }
    println!("\n{} artifact(s) awaiting review", pending.len());
    Ok(())
}

fn handle_diff(stem: &str, dir: &Path) -> Result<(), SnapError> {
    let received = read_artifact(&received_path(dir, stem))?;
    // Without a baseline the whole received file shows as additions.
    let approved = match fs::read_to_string(approved_path(dir, stem)) {
        Ok(text) => canon::normalize_newlines(&text),
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(SnapError::artifact(approved_path(dir, stem), e)),
    };
    output::print_diff(&approved, &received);
    Ok(())
}

fn handle_approve(stem: Option<&str>, all: bool, dir: &Path) -> Result<(), SnapError> {
    // clap guarantees exactly one of `stem` / `--all` is present.
    let stems = match (stem, all) {
        (_, true) => pending_stems(dir)?,
        (Some(s), false) => vec![s.to_string()],
        (None, false) => return Ok(()),
    };

    for stem in &stems {
        let from = received_path(dir, stem);
        let to = approved_path(dir, stem);
        fs::rename(&from, &to).map_err(|e| SnapError::artifact(&from, e))?;
        println!("approved {}", stem);
    }
    Ok(())
}

fn handle_reject(stem: &str, dir: &Path) -> Result<(), SnapError> {
    let path = received_path(dir, stem);
    fs::remove_file(&path).map_err(|e| SnapError::artifact(&path, e))?;
    println!("rejected {}", stem);
    Ok(())
}

// ============================================================================
// ARTIFACT DISCOVERY
// ============================================================================

/// Stems of all received artifacts under `dir`, sorted for deterministic
/// listing and promotion order.
fn pending_stems(dir: &Path) -> Result<Vec<String>, SnapError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut stems = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            SnapError::artifact(dir, std::io::Error::new(ErrorKind::Other, e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(stem) = name.strip_suffix(RECEIVED_SUFFIX) {
            stems.push(stem.to_string());
        }
    }
    stems.sort();
    Ok(stems)
}

fn approved_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}{}", stem, APPROVED_SUFFIX))
}

fn received_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}{}", stem, RECEIVED_SUFFIX))
}

fn read_artifact(path: &Path) -> Result<String, SnapError> {
    fs::read_to_string(path)
        .map(|text| canon::normalize_newlines(&text))
        .map_err(|e| SnapError::artifact(path, e))
}
