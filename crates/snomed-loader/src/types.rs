//! Importer-specific types: errors, configuration and run statistics.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while importing an RF2 description file.
#[derive(Error, Debug)]
pub enum Rf2Error {
    /// I/O error reading the source or writing the destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A source line is not valid UTF-8.
    #[error("Invalid UTF-8 at line {line}")]
    InvalidUtf8 {
        /// 1-based line number in the source file.
        line: u64,
    },

    /// SQLite error while building the description database.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A data row has fewer fields than the positional decoder needs.
    #[error("Malformed record at line {line}: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        /// 1-based line number in the source file.
        line: u64,
        /// Minimum field count.
        expected: usize,
        /// Field count actually present.
        found: usize,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Path exists but is not a regular file.
    #[error("Not a file: {path}")]
    NotAFile {
        /// The offending path.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required file missing from RF2 directory.
    #[error("Required RF2 file not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// The type of file that was missing.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Rejected import configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Rf2Error {
    /// Returns true if the import was skipped because the source file is absent.
    ///
    /// Callers treat this as non-fatal: nothing was read and the destination
    /// was not touched.
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Rf2Error::FileNotFound { .. })
    }
}

/// Result type for RF2 operations.
pub type Rf2Result<T> = Result<T, Rf2Error>;

/// Default number of rows per bulk insert.
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Default number of imported rows between progress events.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100_000;

/// How the destination database replaces a previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplaceMode {
    /// Build next to the destination and rename over it once complete.
    ///
    /// A failed run removes its staging file and leaves any previous
    /// database untouched.
    #[default]
    Atomic,
    /// Delete the destination up front and build directly at its path.
    ///
    /// A failed run leaves the destination absent or partially populated.
    InPlace,
}

/// Configuration for a description import.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Location of the tab-delimited description snapshot.
    pub source_path: PathBuf,
    /// Location to (re)create the indexed store.
    pub destination_path: PathBuf,
    /// Rows per bulk insert (affects memory usage and transaction size).
    pub batch_size: usize,
    /// Imported rows between progress events.
    pub progress_interval: usize,
    /// Destination replacement strategy.
    pub replace_mode: ReplaceMode,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            destination_path: PathBuf::from("assets/snomed.db"),
            batch_size: DEFAULT_BATCH_SIZE,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            replace_mode: ReplaceMode::default(),
        }
    }
}

impl ImportConfig {
    /// Creates a config for the given source and destination with default tuning.
    pub fn new<S: Into<PathBuf>, D: Into<PathBuf>>(source: S, destination: D) -> Self {
        Self {
            source_path: source.into(),
            destination_path: destination.into(),
            ..Default::default()
        }
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the progress interval.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Sets the replace mode.
    pub fn with_replace_mode(mut self, mode: ReplaceMode) -> Self {
        self.replace_mode = mode;
        self
    }

    /// Checks the tuning parameters.
    pub fn validate(&self) -> Rf2Result<()> {
        if self.batch_size == 0 {
            return Err(Rf2Error::InvalidConfig(
                "batch_size must be greater than zero".to_string(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(Rf2Error::InvalidConfig(
                "progress_interval must be greater than zero".to_string(),
            ));
        }
        if self.destination_path.as_os_str().is_empty() {
            return Err(Rf2Error::InvalidConfig(
                "destination_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Path the database is built at before it becomes visible at the destination.
    pub fn staging_path(&self) -> PathBuf {
        match self.replace_mode {
            ReplaceMode::InPlace => self.destination_path.clone(),
            ReplaceMode::Atomic => staging_path_for(&self.destination_path),
        }
    }
}

/// Sibling path used while building, e.g. `snomed.db.partial`.
pub fn staging_path_for(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    destination.with_file_name(name)
}

/// Statistics from an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    /// Data rows read from the source (header excluded).
    pub records_read: usize,
    /// Active rows written to the database.
    pub imported: usize,
    /// Rows dropped because their active flag was not `1`.
    pub skipped_inactive: usize,
    /// Bulk inserts performed.
    pub batches: usize,
    /// Wall-clock duration in milliseconds.
    pub elapsed_ms: u64,
}

impl ImportStats {
    /// Returns the percentage of rows that were imported.
    pub fn import_rate(&self) -> f64 {
        if self.records_read == 0 {
            0.0
        } else {
            (self.imported as f64 / self.records_read as f64) * 100.0
        }
    }
}
