//! Output formatting and styling module.
//!
//! Provides a centralized interface for console status output: colored
//! notices and the end-of-run summary table. Timestamped progress lines go
//! through `tracing` instead; this module only covers what the user reads on
//! stdout.

use crate::organizer::{FileOutcome, OrganizeSummary};
use colored::*;

/// Manages console output with consistent styling and formatting.
///
/// This struct provides methods for:
/// - Success messages (green with ✓)
/// - Error messages (red with ✗)
/// - Warning messages (yellow with ⚠)
/// - Info messages (cyan with ℹ)
/// - Summary tables with statistics
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sortdir::output::OutputFormatter;
    /// OutputFormatter::success("Directory organized!");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark to stderr.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sortdir::output::OutputFormatter;
    /// OutputFormatter::error("Failed to organize directory");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{}", Self::error_line(message));
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{}", Self::warning_line(message));
    }

    /// Prints an info message in cyan with an info symbol.
    pub fn info(message: &str) {
        println!("{}", Self::info_line(message));
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Formats an error line without printing it.
    pub fn error_line(message: &str) -> String {
        format!("{} {}", "✗".red(), message)
    }

    /// Formats a warning line without printing it.
    pub fn warning_line(message: &str) -> String {
        format!("{} {}", "⚠".yellow(), message)
    }

    /// Formats an info line without printing it.
    pub fn info_line(message: &str) -> String {
        format!("{} {}", "ℹ".cyan(), message)
    }

    /// Prints a summary table of an organize pass.
    ///
    /// Lists moved files per category, followed by skipped and failed totals
    /// and the files that failed.
    pub fn summary_table(summary: &OrganizeSummary) {
        let title = if summary.dry_run {
            "DRY RUN SUMMARY"
        } else {
            "SUMMARY"
        };
        Self::header(title);

        let counts = summary.category_counts();

        // Calculate column widths
        let max_category_len = counts
            .keys()
            .map(|name| name.len())
            .max()
            .unwrap_or(0)
            .max(8); // At least "Category" width

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = max_category_len
        );
        println!("{}", "-".repeat(max_category_len + 10));

        for (category, count) in &counts {
            println!(
                "{:<width$} | {} {}",
                category,
                count.to_string().green(),
                file_word(*count),
                width = max_category_len
            );
        }

        println!("{}", "-".repeat(max_category_len + 10));
        let moved = summary.moved_count();
        println!(
            "{:<width$} | {} {}",
            "Moved".bold(),
            moved.to_string().green().bold(),
            file_word(moved),
            width = max_category_len
        );

        let skipped = summary.skipped_count();
        println!(
            "{:<width$} | {} {}",
            "Skipped",
            skipped.to_string().yellow(),
            file_word(skipped),
            width = max_category_len
        );

        let failed = summary.failed_count();
        println!(
            "{:<width$} | {} {}",
            "Failed",
            failed.to_string().red(),
            file_word(failed),
            width = max_category_len
        );

        for outcome in &summary.outcomes {
            if let FileOutcome::Failed { file, reason, .. } = outcome {
                println!("  {} {}: {}", "✗".red(), file.display(), reason);
            }
        }
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }
}

fn file_word(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
