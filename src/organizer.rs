//! Directory organization pass.
//!
//! [`organize`] walks the immediate entries of one directory, looks each file
//! up in an [`ExtensionMap`] and moves matches into their category folder.
//! Every file gets exactly one [`FileOutcome`]; nothing is logged here
//! directly, all observation goes through the [`Reporter`] passed in.

use crate::extension_map::{ExtensionMap, extension_of};
use crate::file_organizer::{ConflictPolicy, FileOrganizer, OrganizeError, OrganizeResult};
use crate::reporter::Reporter;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// How the pass reacts to a per-file failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Record the failure and carry on with the next entry.
    #[default]
    Continue,
    /// Stop the pass after the first failure.
    Abort,
}

/// Settings for one organize pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrganizeOptions {
    /// Plan the moves without touching the filesystem.
    pub dry_run: bool,
    /// What to do when the destination name is taken.
    pub conflict: ConflictPolicy,
    /// Whether a failed file stops the pass.
    pub on_error: ErrorPolicy,
}

/// Terminal outcome of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Moved (or, in a dry run, would be moved) into a category folder.
    Moved {
        file: PathBuf,
        category: String,
        destination: PathBuf,
    },
    /// No category for this extension; the file was left alone.
    Skipped { file: PathBuf, extension: String },
    /// Folder creation or the move itself failed; the file was left alone.
    Failed {
        file: PathBuf,
        category: String,
        reason: String,
    },
}

/// Aggregated result of an organize pass.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizeSummary {
    pub directory: PathBuf,
    pub started_at: DateTime<Local>,
    pub dry_run: bool,
    /// True when [`ErrorPolicy::Abort`] cut the pass short.
    pub aborted: bool,
    pub outcomes: Vec<FileOutcome>,
}

impl OrganizeSummary {
    fn new(directory: &Path, dry_run: bool) -> Self {
        Self {
            directory: directory.to_path_buf(),
            started_at: Local::now(),
            dry_run,
            aborted: false,
            outcomes: Vec::new(),
        }
    }

    /// Appends `outcome`; returns true when the pass has to stop.
    fn record(&mut self, outcome: FileOutcome, on_error: ErrorPolicy) -> bool {
        let failed = matches!(outcome, FileOutcome::Failed { .. });
        self.outcomes.push(outcome);
        if failed && on_error == ErrorPolicy::Abort {
            self.aborted = true;
        }
        self.aborted
    }

    pub fn moved_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Moved { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed { .. }))
            .count()
    }

    /// Number of moved files per category folder.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for outcome in &self.outcomes {
            if let FileOutcome::Moved { category, .. } = outcome {
                *counts.entry(category.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// True when no file failed and the pass ran to the end.
    pub fn is_success(&self) -> bool {
        !self.aborted && self.failed_count() == 0
    }
}

/// One entry of the directory snapshot.
#[derive(Debug)]
struct ScannedEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Organizes the immediate entries of `directory`.
///
/// The listing is read once up front, so folders created during the pass are
/// never visited. Subdirectories are skipped without being reported. The only
/// errors returned are for a `directory` that is not a readable directory;
/// per-file problems end up as [`FileOutcome::Failed`].
///
/// # Examples
///
/// ```no_run
/// use sortdir::extension_map::ExtensionMap;
/// use sortdir::organizer::{OrganizeOptions, organize};
/// use sortdir::reporter::TracingReporter;
/// use std::path::Path;
///
/// let summary = organize(
///     Path::new("/home/user/Downloads"),
///     &ExtensionMap::default(),
///     &OrganizeOptions::default(),
///     &mut TracingReporter,
/// )
/// .expect("directory should be readable");
/// println!("moved {} files", summary.moved_count());
/// ```
pub fn organize(
    directory: &Path,
    extension_map: &ExtensionMap,
    options: &OrganizeOptions,
    reporter: &mut dyn Reporter,
) -> OrganizeResult<OrganizeSummary> {
    let scan = scan_directory(directory)?;

    reporter.started(directory, options.dry_run);
    let mut summary = OrganizeSummary::new(directory, options.dry_run);

    'pass: {
        for error in scan.unreadable {
            let outcome = unreadable_entry(directory, error, reporter);
            if summary.record(outcome, options.on_error) {
                break 'pass;
            }
        }

        for entry in scan.entries.iter().filter(|entry| !entry.is_dir) {
            let outcome = process_file(entry, directory, extension_map, options, reporter);
            if summary.record(outcome, options.on_error) {
                break 'pass;
            }
        }
    }

    reporter.finished(&summary);
    Ok(summary)
}

/// Snapshot of a directory listing.
struct Scan {
    entries: Vec<ScannedEntry>,
    unreadable: Vec<io::Error>,
}

fn scan_directory(directory: &Path) -> OrganizeResult<Scan> {
    let metadata = fs::metadata(directory).map_err(|e| OrganizeError::InvalidBasePath {
        path: directory.to_path_buf(),
        source: e,
    })?;
    if !metadata.is_dir() {
        return Err(OrganizeError::InvalidBasePath {
            path: directory.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let read_dir = fs::read_dir(directory).map_err(|e| OrganizeError::ReadDirFailed {
        path: directory.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    let mut unreadable = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                unreadable.push(e);
                continue;
            }
        };
        let path = entry.path();
        // Follows symlinks, so a link to a directory counts as one.
        let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        entries.push(ScannedEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            is_dir,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Scan {
        entries,
        unreadable,
    })
}

/// A listing entry that could not be read. It has no name, so the outcome
/// points at the directory being organized.
fn unreadable_entry(
    directory: &Path,
    error: io::Error,
    reporter: &mut dyn Reporter,
) -> FileOutcome {
    let error = OrganizeError::EntryReadFailed {
        path: directory.to_path_buf(),
        source: error,
    };
    reporter.failed(directory, directory, &error);
    FileOutcome::Failed {
        file: directory.to_path_buf(),
        category: String::new(),
        reason: error.to_string(),
    }
}

fn process_file(
    entry: &ScannedEntry,
    directory: &Path,
    extension_map: &ExtensionMap,
    options: &OrganizeOptions,
    reporter: &mut dyn Reporter,
) -> FileOutcome {
    let extension = extension_of(&entry.name);
    let Some(category) = extension_map.category_for_file(&entry.name) else {
        reporter.skipped(&entry.path, &extension);
        return FileOutcome::Skipped {
            file: entry.path.clone(),
            extension,
        };
    };

    let dest_folder = directory.join(category);
    let result = if options.dry_run {
        plan_move(entry, &dest_folder, options.conflict)
    } else {
        FileOrganizer::ensure_folder(&dest_folder)
            .and_then(|()| FileOrganizer::move_into(&entry.path, &dest_folder, options.conflict))
    };

    match result {
        Ok(destination) => {
            reporter.moved(&entry.path, category, &destination, options.dry_run);
            FileOutcome::Moved {
                file: entry.path.clone(),
                category: category.to_string(),
                destination,
            }
        }
        Err(e) => {
            reporter.failed(&entry.path, &dest_folder, &e);
            FileOutcome::Failed {
                file: entry.path.clone(),
                category: category.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

/// Destination a real run would use, without creating or moving anything.
fn plan_move(
    entry: &ScannedEntry,
    dest_folder: &Path,
    conflict: ConflictPolicy,
) -> OrganizeResult<PathBuf> {
    // `ensure_folder` fails on anything at this path that is not a directory.
    if fs::symlink_metadata(dest_folder).is_ok() && !dest_folder.is_dir() {
        return Err(OrganizeError::DirectoryCreationFailed {
            path: dest_folder.to_path_buf(),
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        });
    }
    FileOrganizer::resolve_destination(&entry.path, dest_folder, conflict)
}
