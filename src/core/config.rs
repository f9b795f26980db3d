use std::path::PathBuf;

/// Runtime settings for a tour, assembled from the command line.
///
/// There is no configuration file; every setting falls back to a default so
/// the program can be run with no arguments at all.
#[derive(Debug, Clone)]
pub struct TourOptions {
    /// Directory in which the file walkthrough creates its scratch file.
    pub scratch_dir: PathBuf,
    /// Emit `debug` log records on stderr.
    pub verbose: bool,
}

impl TourOptions {
    pub fn new(scratch_dir: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            scratch_dir: scratch_dir.unwrap_or_else(|| PathBuf::from(".")),
            verbose,
        }
    }

    /// The most detailed level that reaches the log.
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
