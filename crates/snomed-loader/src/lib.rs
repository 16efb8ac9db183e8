//! # snomed-loader
//!
//! Builds the offline SNOMED CT description database from an RF2
//! Description snapshot.
//!
//! The source is streamed record by record, inactive descriptions are
//! dropped, and the remaining `(id, conceptId, term)` projections are
//! bulk-loaded into a SQLite file with indexes on `term` and `conceptId`.
//!
//! ```no_run
//! use snomed_loader::{import_descriptions, ImportConfig};
//!
//! let config = ImportConfig::new(
//!     "Snapshot/Terminology/sct2_Description_Snapshot-en_INT_20250801.txt",
//!     "assets/snomed.db",
//! );
//! let stats = import_descriptions(&config)?;
//! println!("imported {}", stats.imported);
//! # Ok::<(), snomed_loader::Rf2Error>(())
//! ```

#![warn(missing_docs)]

pub mod db;
mod description;
mod import;
mod loader;
pub mod parser;
mod types;

pub use db::DescriptionDb;
pub use import::{import, import_descriptions};
pub use loader::{discover_description_file, extract_release_date, format_bytes};
pub use parser::{Rf2Parser, Rf2Record};
pub use types::{
    staging_path_for, ImportConfig, ImportStats, ReplaceMode, Rf2Error, Rf2Result,
    DEFAULT_BATCH_SIZE, DEFAULT_PROGRESS_INTERVAL,
};

// Re-export snomed-types for convenience
pub use snomed_types;
