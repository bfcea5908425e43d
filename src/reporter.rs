//! Observers for organize passes.
//!
//! The organizer reports every outcome through a [`Reporter`] instead of a
//! process-wide logger, so callers decide where progress goes and tests can
//! record it.

use crate::file_organizer::OrganizeError;
use crate::organizer::OrganizeSummary;
use std::path::Path;
use tracing::{error, info};

/// Receives one call per outcome of an organize pass.
pub trait Reporter {
    /// The pass is about to process `directory`.
    fn started(&mut self, directory: &Path, dry_run: bool);

    /// `file` was moved to `destination`, or would be in a dry run.
    fn moved(&mut self, file: &Path, category: &str, destination: &Path, dry_run: bool);

    /// No category matched `extension`; `file` stays where it is.
    fn skipped(&mut self, file: &Path, extension: &str);

    /// Creating `dest_folder` or moving `file` into it failed.
    fn failed(&mut self, file: &Path, dest_folder: &Path, error: &OrganizeError);

    /// Called once after the last entry.
    fn finished(&mut self, summary: &OrganizeSummary);
}

/// Writes outcomes as `tracing` events: INFO for progress, ERROR for failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn started(&mut self, directory: &Path, dry_run: bool) {
        if dry_run {
            info!("[DRY RUN] Organizing files in: {}", directory.display());
        } else {
            info!("Organizing files in: {}", directory.display());
        }
    }

    fn moved(&mut self, file: &Path, category: &str, destination: &Path, dry_run: bool) {
        let name = display_name(file);
        if dry_run {
            info!(category, "Would move '{}' to '{}'", name, destination.display());
        } else {
            info!(category, "Moved '{}' to '{}'", name, destination.display());
        }
    }

    fn skipped(&mut self, file: &Path, extension: &str) {
        info!(extension, "Skipped '{}': Unknown file type", display_name(file));
    }

    fn failed(&mut self, file: &Path, dest_folder: &Path, error: &OrganizeError) {
        error!(
            "Failed to move '{}' to '{}': {}",
            file.display(),
            dest_folder.display(),
            error
        );
    }

    fn finished(&mut self, summary: &OrganizeSummary) {
        let moved = summary.moved_count();
        let skipped = summary.skipped_count();
        let failed = summary.failed_count();
        if summary.aborted {
            error!(moved, skipped, failed, "File organization aborted after a failure.");
        } else {
            info!(moved, skipped, failed, "File organization completed.");
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
