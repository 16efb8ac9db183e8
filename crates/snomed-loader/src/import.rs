//! Description import: RF2 snapshot in, indexed SQLite database out.
//!
//! The run is a single linear pass: open the source, stream records,
//! drop inactive ones, flush fixed-size batches into a freshly created
//! database, then close it. With [`ReplaceMode::Atomic`] the database is
//! built at a staging path and only renamed over the destination once
//! everything succeeded.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use snomed_types::{DescriptionRow, Rf2Description};
use tracing::{debug, info, warn};

use crate::db::DescriptionDb;
use crate::parser::Rf2Parser;
use crate::types::{ImportConfig, ImportStats, ReplaceMode, Rf2Error, Rf2Result};

/// Imports active descriptions from `source` into a new database at `destination`.
///
/// Convenience wrapper over [`import_descriptions`] with default tuning;
/// returns the number of imported rows.
pub fn import<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination: D) -> Rf2Result<usize> {
    let config = ImportConfig::new(source.as_ref(), destination.as_ref());
    import_descriptions(&config).map(|stats| stats.imported)
}

/// Rebuilds the description database described by `config`.
///
/// # Errors
/// - [`Rf2Error::FileNotFound`] if the source is absent, and
///   [`Rf2Error::NotAFile`] if it is a directory or other non-file; the
///   destination is not touched in either case.
/// - [`Rf2Error::MalformedRecord`] on the first row with fewer than eight
///   fields.
/// - I/O, CSV and database errors abort the run. In
///   [`ReplaceMode::InPlace`] batches flushed before the failure remain in
///   the destination.
pub fn import_descriptions(config: &ImportConfig) -> Rf2Result<ImportStats> {
    let source = config.source_path.as_path();
    if !source.exists() {
        return Err(Rf2Error::FileNotFound {
            path: source.display().to_string(),
        });
    }
    if !source.is_file() {
        return Err(Rf2Error::NotAFile {
            path: source.display().to_string(),
        });
    }
    config.validate()?;

    let destination = config.destination_path.as_path();
    let build_path = config.staging_path();

    info!(
        source = %source.display(),
        destination = %destination.display(),
        mode = ?config.replace_mode,
        "Creating description database"
    );

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    remove_database_files(&build_path)?;

    let result = build(config, &build_path);

    match (config.replace_mode, result) {
        (ReplaceMode::InPlace, result) => result,
        (ReplaceMode::Atomic, Ok(stats)) => match swap_into_place(&build_path, destination) {
            Ok(()) => Ok(stats),
            Err(e) => {
                discard_staging(&build_path);
                Err(e.into())
            }
        },
        (ReplaceMode::Atomic, Err(e)) => {
            discard_staging(&build_path);
            Err(e)
        }
    }
}

/// Renames the staged database over `destination`.
///
/// Journal files left next to the old database would otherwise be replayed
/// into the new one when it is next opened.
fn swap_into_place(staged: &Path, destination: &Path) -> io::Result<()> {
    for sidecar in sidecar_paths(destination) {
        remove_if_exists(&sidecar)?;
    }
    fs::rename(staged, destination)
}

fn discard_staging(path: &Path) {
    if let Err(e) = remove_database_files(path) {
        warn!(path = %path.display(), "Could not remove staging database: {}", e);
    }
}

/// Streams the source into a new database at `path`.
fn build(config: &ImportConfig, path: &Path) -> Rf2Result<ImportStats> {
    let started = Instant::now();
    let mut db = DescriptionDb::create(path)?;
    let mut parser = Rf2Parser::<_, Rf2Description>::from_path(&config.source_path)?;

    info!("Reading description file...");

    let interval = config.progress_interval;
    let mut imported = 0usize;
    let mut batches = 0usize;

    let loaded = parser.parse_batched(config.batch_size, |batch| {
        let rows: Vec<DescriptionRow> = batch.into_iter().map(DescriptionRow::from).collect();
        let previous = imported;
        imported += db.insert_batch(&rows)?;
        batches += 1;
        debug!(batch = batches, rows = rows.len(), "Flushed batch");

        if imported / interval > previous / interval {
            info!(progress = imported, "Processed {} rows...", imported);
        }
        Ok(())
    });

    // Close the handle on every path; the load error takes precedence.
    let closed = db.close();
    let loaded = loaded?;
    closed?;

    let stats = ImportStats {
        records_read: parser.records_read(),
        imported: loaded,
        skipped_inactive: parser.records_skipped(),
        batches,
        elapsed_ms: started.elapsed().as_millis() as u64,
    };

    info!(
        imported = stats.imported,
        skipped = stats.skipped_inactive,
        elapsed_ms = stats.elapsed_ms,
        "Done! Imported {} active descriptions ({:.1}% of rows) to {}",
        stats.imported,
        stats.import_rate(),
        config.destination_path.display()
    );

    Ok(stats)
}

/// SQLite files that may accompany the database at `path`.
fn sidecar_paths(path: &Path) -> [PathBuf; 3] {
    ["-journal", "-wal", "-shm"].map(|suffix| {
        let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(suffix);
        path.with_file_name(name)
    })
}

/// Removes the database at `path` together with any journal files.
fn remove_database_files(path: &Path) -> io::Result<()> {
    remove_if_exists(path)?;
    for sidecar in sidecar_paths(path) {
        remove_if_exists(&sidecar)?;
    }
    Ok(())
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
