use std::path::Path;

use tracing::{debug, warn};

use crate::core::errors::Result;
use crate::core::scratch::ScratchFile;
use crate::demos::datetime::{format_timestamp, now};
use crate::utils::section;

/// What the walkthrough observed about its scratch file before deleting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub lines: Vec<String>,
    pub size: u64,
}

/// The text written to the scratch file, stamped with `created_at`.
pub fn scratch_content(created_at: &str) -> String {
    format!(
        "This is a temporary file\nused to walk through file operations\nCreated at: {created_at}\n"
    )
}

/// Creates, reads back, measures and deletes the scratch file in `dir`.
///
/// The file is removed on every path out of this function: explicitly on
/// success, by the guard's `Drop` when an earlier step fails.
pub fn exercise_scratch_file(dir: &Path) -> Result<FileReport> {
    let stamp = format_timestamp(&now());
    let scratch = ScratchFile::create(dir, &scratch_content(&stamp))?;
    println!("File created: {}", scratch.path().display());

    let lines = scratch.read_lines()?;
    println!("File content:");
    for (index, line) in lines.iter().enumerate() {
        println!("  line {}: {}", index + 1, line);
    }

    let size = scratch.size()?;
    println!("File size: {size} bytes");

    scratch.delete()?;
    println!("Temporary file deleted");

    Ok(FileReport { lines, size })
}

/// Runs the walkthrough, reporting any I/O failure on stderr.
pub fn run(dir: &Path) -> Option<FileReport> {
    section("📁 File operations");

    match exercise_scratch_file(dir) {
        Ok(report) => {
            debug!(lines = report.lines.len(), size = report.size, "file walkthrough finished");
            Some(report)
        }
        Err(e) => {
            warn!(dir = %dir.display(), "file walkthrough failed");
            eprintln!("❌ File operation failed: {e}");
            None
        }
    }
}
