//! Command-line interface module for sortdir.
//!
//! This module handles all CLI-related functionality including:
//! - Argument parsing
//! - Logging setup
//! - Choosing the directory, from the arguments or the interactive prompt
//! - Running the organize pass and printing its summary

use crate::extension_map::ExtensionMap;
use crate::file_organizer::{ConflictPolicy, OrganizeError};
use crate::organizer::{ErrorPolicy, OrganizeOptions, OrganizeSummary, organize};
use crate::output::OutputFormatter;
use crate::prompt::prompt_for_directory;
use crate::reporter::TracingReporter;
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// Sort the files of a directory into category folders by extension.
#[derive(Debug, Clone, Parser)]
#[command(name = "sortdir", version, about)]
pub struct Cli {
    /// Directory to organize. When omitted, the path is asked for interactively.
    pub directory: Option<PathBuf>,

    /// Show what would be moved without touching any file.
    #[arg(long)]
    pub dry_run: bool,

    /// What to do when the category folder already holds a file with the same name.
    #[arg(long, value_enum, default_value_t = ConflictPolicy::Fail)]
    pub on_conflict: ConflictPolicy,

    /// Stop at the first file that cannot be organized.
    #[arg(long)]
    pub stop_on_error: bool,

    /// Print the run summary as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Log debug details.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Organize options selected by the flags.
    pub fn options(&self) -> OrganizeOptions {
        OrganizeOptions {
            dry_run: self.dry_run,
            conflict: self.on_conflict,
            on_error: if self.stop_on_error {
                ErrorPolicy::Abort
            } else {
                ErrorPolicy::Continue
            },
        }
    }

    /// Most verbose level the log output should show.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Organize(#[from] OrganizeError),
    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),
    #[error("Failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Installs the global `tracing` subscriber.
///
/// Lines are timestamped, leveled and written to stderr so they never mix
/// with the summary on stdout. Calling it twice is harmless.
pub fn init_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Runs the CLI with already parsed arguments.
///
/// Uses the standard extension table. A cancelled prompt is not an error.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use sortdir::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from(["sortdir", "/path/to/directory", "--dry-run"]);
/// if let Err(e) = run_cli(&cli) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli(cli: &Cli) -> Result<(), CliError> {
    let directory = match &cli.directory {
        Some(dir) => dir.clone(),
        None => {
            let stdin = io::stdin();
            match prompt_for_directory(stdin.lock(), io::stdout())? {
                Some(dir) => dir,
                None => return Ok(()),
            }
        }
    };

    if !cli.json {
        OutputFormatter::info(&format!("Organizing files in: {}", directory.display()));
    }

    let summary = organize_directory(&directory, &ExtensionMap::default(), cli)?;
    print_summary(&summary, cli.json)
}

/// Organizes `directory` with the options from `cli`, logging through `tracing`.
pub fn organize_directory(
    directory: &Path,
    extension_map: &ExtensionMap,
    cli: &Cli,
) -> Result<OrganizeSummary, CliError> {
    tracing::debug!(
        extensions = extension_map.len(),
        options = ?cli.options(),
        "Starting organize pass"
    );
    let mut reporter = TracingReporter;
    Ok(organize(
        directory,
        extension_map,
        &cli.options(),
        &mut reporter,
    )?)
}

fn print_summary(summary: &OrganizeSummary, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    OutputFormatter::summary_table(summary);

    if summary.dry_run {
        OutputFormatter::dry_run_notice("No files were modified.");
    } else if summary.aborted {
        OutputFormatter::error("Organization stopped after the first failure.");
    } else if summary.failed_count() > 0 {
        OutputFormatter::warning("Some files could not be organized. Please review errors above.");
    } else {
        OutputFormatter::success("File organization completed.");
    }

    Ok(())
}
