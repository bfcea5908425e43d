/// Folder creation and single-file moves.
///
/// This module holds the two filesystem primitives the organizer is built
/// from: ensuring a category folder exists, and moving one file into it while
/// keeping its name.
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while organizing a directory.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The directory to organize is missing or is not a directory.
    #[error("Invalid base path {}: {source}", .path.display())]
    InvalidBasePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The directory listing could not be read.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An entry of the directory listing could not be read.
    #[error("Failed to read an entry of {}: {source}", .path.display())]
    EntryReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to create a category directory.
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Failed to move a file to its category directory.
    #[error("Failed to move {} to {}: {error}", .from.display(), .to.display())]
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: io::Error,
    },
    /// Something already occupies the destination and the conflict policy forbids replacing it.
    #[error("Destination already exists: {}", .path.display())]
    DestinationExists { path: PathBuf },
    /// The source path has no file name component.
    #[error("Path has no file name: {}", .path.display())]
    InvalidFileName { path: PathBuf },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// What to do when a file with the same name is already in the category folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ConflictPolicy {
    /// Leave the source where it is and report a failure.
    #[default]
    Fail,
    /// Replace the existing file.
    Overwrite,
    /// Move under the first free `name (N).ext` variant.
    Rename,
}

/// Filesystem operations used by the organizer.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Creates `path` and any missing parents.
    ///
    /// Succeeds without touching anything if the directory already exists, so
    /// existing contents are never disturbed. Fails if some component exists
    /// as a non-directory or permission is denied.
    pub fn ensure_folder(path: &Path) -> OrganizeResult<()> {
        fs::create_dir_all(path).map_err(|e| OrganizeError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Moves `source` into `dest_folder`, keeping its file name.
    ///
    /// Returns the path the file ended up at, which differs from
    /// `dest_folder/<name>` only under [`ConflictPolicy::Rename`].
    ///
    /// Same-volume moves are a single rename. Across volumes the file is
    /// copied and the source removed afterwards; if that removal fails the
    /// copy stays behind and the error is returned.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sortdir::file_organizer::{ConflictPolicy, FileOrganizer};
    /// use std::path::Path;
    ///
    /// let result = FileOrganizer::move_into(
    ///     Path::new("/path/to/base/image.png"),
    ///     Path::new("/path/to/base/Images"),
    ///     ConflictPolicy::Fail,
    /// );
    ///
    /// match result {
    ///     Ok(dest) => println!("Moved to {}", dest.display()),
    ///     Err(e) => eprintln!("Move failed: {}", e),
    /// }
    /// ```
    pub fn move_into(
        source: &Path,
        dest_folder: &Path,
        conflict: ConflictPolicy,
    ) -> OrganizeResult<PathBuf> {
        let destination = Self::resolve_destination(source, dest_folder, conflict)?;
        Self::rename_or_copy(source, &destination)?;
        Ok(destination)
    }

    /// Picks the path [`move_into`](Self::move_into) would move `source` to.
    ///
    /// Only inspects the filesystem. A directory at `dest_folder/<name>` is a
    /// failure under every policy; any other existing entry is handled by
    /// `conflict`.
    pub fn resolve_destination(
        source: &Path,
        dest_folder: &Path,
        conflict: ConflictPolicy,
    ) -> OrganizeResult<PathBuf> {
        let file_name = source
            .file_name()
            .ok_or_else(|| OrganizeError::InvalidFileName {
                path: source.to_path_buf(),
            })?;

        let destination = dest_folder.join(file_name);

        let Ok(existing) = fs::symlink_metadata(&destination) else {
            return Ok(destination);
        };

        // Never replace or side-step a directory with a file.
        if existing.is_dir() || destination.is_dir() {
            return Err(OrganizeError::DestinationExists { path: destination });
        }

        match conflict {
            ConflictPolicy::Fail => Err(OrganizeError::DestinationExists { path: destination }),
            ConflictPolicy::Overwrite => Ok(destination),
            ConflictPolicy::Rename => Ok(Self::free_destination(dest_folder, Path::new(file_name))),
        }
    }

    fn rename_or_copy(source: &Path, destination: &Path) -> OrganizeResult<()> {
        let move_failure = |error: io::Error| OrganizeError::FileMoveFailure {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            error,
        };

        match fs::rename(source, destination) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                fs::copy(source, destination).map_err(move_failure)?;
                fs::remove_file(source).map_err(move_failure)
            }
            Err(e) => Err(move_failure(e)),
        }
    }

    /// First `stem (N).ext` name in `folder` that is not taken.
    fn free_destination(folder: &Path, file_name: &Path) -> PathBuf {
        let stem = file_name.file_stem().unwrap_or_default();
        let extension = file_name.extension();

        let mut counter = 1usize;
        loop {
            let mut candidate = OsString::from(stem);
            candidate.push(format!(" ({})", counter));
            if let Some(ext) = extension {
                candidate.push(".");
                candidate.push(ext);
            }
            let candidate = folder.join(candidate);
            if fs::symlink_metadata(&candidate).is_err() {
                return candidate;
            }
            counter += 1;
        }
    }
}
