//! sortdir - sort a directory's files into category folders
//!
//! This library looks up each file's extension in an [`ExtensionMap`], moves
//! matching files into the category subfolder of the scanned directory and
//! reports one outcome per file through a [`Reporter`].

pub mod cli;
pub mod extension_map;
pub mod file_organizer;
pub mod organizer;
pub mod output;
pub mod prompt;
pub mod reporter;

pub use extension_map::{ExtensionMap, extension_of};
pub use file_organizer::{ConflictPolicy, FileOrganizer, OrganizeError, OrganizeResult};
pub use organizer::{ErrorPolicy, FileOutcome, OrganizeOptions, OrganizeSummary, organize};
pub use reporter::{Reporter, TracingReporter};

pub use cli::{Cli, run_cli};
