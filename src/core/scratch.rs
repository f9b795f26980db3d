use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::errors::Result;

/// Name of the file the file walkthrough creates and removes again.
pub const SCRATCH_FILE_NAME: &str = "temp_example.txt";

/// A text file that lives only as long as this guard.
///
/// The file is written on creation. Calling [`ScratchFile::delete`] removes it
/// and reports failures; if the guard is dropped first (an early `?` return,
/// for instance) removal is still attempted and failures are only logged.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    armed: bool,
}

impl ScratchFile {
    /// Writes `content` to [`SCRATCH_FILE_NAME`] inside `dir`, replacing any
    /// stale copy left behind by an earlier run.
    pub fn create(dir: &Path, content: &str) -> Result<Self> {
        let scratch = Self::create_with(dir, |file| file.write_all(content.as_bytes()))?;
        debug!(path = %scratch.path.display(), bytes = content.len(), "scratch file written");
        Ok(scratch)
    }

    /// Creates the file, arms the guard, then lets `fill` write into it.
    ///
    /// The guard exists before the first byte is written, so a failing `fill`
    /// still removes the half-written file.
    pub fn create_with<F>(dir: &Path, fill: F) -> Result<Self>
    where
        F: FnOnce(&mut File) -> io::Result<()>,
    {
        let path = dir.join(SCRATCH_FILE_NAME);
        let mut file = File::create(&path)?;
        let scratch = Self { path, armed: true };
        let written = fill(&mut file).and_then(|()| file.sync_all());
        // Close the handle before the guard may need to remove the file.
        drop(file);
        written?;
        Ok(scratch)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file back, split into lines without their terminators.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Size of the file on disk, in bytes.
    pub fn size(&self) -> Result<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }

    /// Removes the file. A file that is already gone counts as removed.
    pub fn delete(mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        self.armed = false;
        debug!(path = %self.path.display(), "scratch file deleted");
        Ok(())
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "scratch file cleaned up on drop"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "could not clean up scratch file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn dropping_the_guard_removes_the_file() {
        let dir = tempdir().unwrap();
        let path = {
            let scratch = ScratchFile::create(dir.path(), "one\ntwo\n").unwrap();
            assert!(scratch.path().exists());
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn reads_back_what_was_written() {
        let dir = tempdir().unwrap();
        let scratch = ScratchFile::create(dir.path(), "alpha\nbeta\n").unwrap();

        assert_eq!(scratch.read_lines().unwrap(), vec!["alpha", "beta"]);
        assert_eq!(scratch.size().unwrap(), 11);

        let path = scratch.path().to_path_buf();
        scratch.delete().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn delete_tolerates_a_missing_file() {
        let dir = tempdir().unwrap();
        let scratch = ScratchFile::create(dir.path(), "x").unwrap();
        fs::remove_file(scratch.path()).unwrap();
        assert!(scratch.delete().is_ok());
    }

    #[test]
    fn failed_write_removes_the_partial_file() {
        let dir = tempdir().unwrap();
        let result = ScratchFile::create_with(dir.path(), |file| {
            file.write_all(b"half")?;
            Err(io::Error::other("disk full"))
        });

        assert!(result.is_err());
        assert!(!dir.path().join(SCRATCH_FILE_NAME).exists());
    }

    #[test]
    fn create_fails_in_a_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(ScratchFile::create(&missing, "x").is_err());
    }
}
