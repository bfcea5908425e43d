//! Interactive directory prompt.

use crate::output::OutputFormatter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const PROMPT: &str = "Enter folder path to organize (or press Enter to cancel): ";
pub const CANCELLED: &str = "No path provided. File organization cancelled.";
pub const INVALID_PATH: &str = "Invalid folder path! Please try again.";

/// Asks for a directory until an existing one is entered.
///
/// Returns `Ok(None)` when the user enters a blank line or input ends, after
/// printing the cancellation notice. Invalid paths re-prompt with no limit.
///
/// # Examples
///
/// ```
/// use sortdir::prompt::prompt_for_directory;
///
/// let mut output = Vec::new();
/// let choice = prompt_for_directory("\n".as_bytes(), &mut output).unwrap();
/// assert!(choice.is_none());
/// ```
pub fn prompt_for_directory<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<PathBuf>> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        let trimmed = line.trim();

        if read == 0 || trimmed.is_empty() {
            writeln!(output, "{}", OutputFormatter::warning_line(CANCELLED))?;
            return Ok(None);
        }

        let candidate = PathBuf::from(trimmed);
        if candidate.is_dir() {
            return Ok(Some(candidate));
        }

        writeln!(output, "{}", OutputFormatter::error_line(INVALID_PATH))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(input: &str) -> (Option<PathBuf>, String) {
        let mut output = Vec::new();
        let result = prompt_for_directory(input.as_bytes(), &mut output).expect("Prompt failed");
        (result, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn test_blank_line_cancels() {
        let (result, output) = run("   \n");
        assert!(result.is_none());
        assert!(output.contains(CANCELLED));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (result, output) = run("");
        assert!(result.is_none());
        assert!(output.contains(CANCELLED));
    }

    #[test]
    fn test_valid_directory_is_returned_trimmed() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input = format!("  {}  \n", temp_dir.path().display());

        let (result, output) = run(&input);

        assert_eq!(result, Some(temp_dir.path().to_path_buf()));
        assert!(!output.contains(INVALID_PATH));
    }

    #[test]
    fn test_invalid_paths_reprompt_until_valid() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("missing");
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").expect("Failed to write file");
        let input = format!(
            "{}\n{}\n{}\n",
            missing.display(),
            file.display(),
            temp_dir.path().display()
        );

        let (result, output) = run(&input);

        assert_eq!(result, Some(temp_dir.path().to_path_buf()));
        assert_eq!(output.matches(INVALID_PATH).count(), 2);
        assert_eq!(output.matches(PROMPT).count(), 3);
    }

    #[test]
    fn test_invalid_then_blank_cancels() {
        let (result, output) = run("/definitely/not/here\n\n");
        assert!(result.is_none());
        assert!(output.contains(INVALID_PATH));
        assert!(output.contains(CANCELLED));
    }
}
