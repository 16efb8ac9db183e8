//! RF2 release discovery utilities.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{Rf2Error, Rf2Result};

const DESCRIPTION_SNAPSHOT_PREFIX: &str = "sct2_Description_Snapshot";

/// Locates the description snapshot file in a SNOMED CT release directory.
///
/// Accepts the release root, a directory one level above it, or the
/// `Terminology` directory itself.
pub fn discover_description_file<P: AsRef<Path>>(path: P) -> Rf2Result<PathBuf> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(Rf2Error::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let terminology_dir = find_terminology_dir(path)?;

    let mut candidates = Vec::new();
    for entry in fs::read_dir(&terminology_dir)? {
        let entry = entry?;
        let filename = entry.file_name();
        let filename_str = filename.to_string_lossy();

        if filename_str.starts_with(DESCRIPTION_SNAPSHOT_PREFIX) && filename_str.ends_with(".txt") {
            candidates.push(entry.path());
        }
    }

    // Stable choice when a release ships more than one language file.
    candidates.sort();
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| Rf2Error::RequiredFileMissing {
            file_type: "Description".to_string(),
            directory: terminology_dir.display().to_string(),
        })
}

/// Finds the Terminology directory within an RF2 release structure.
fn find_terminology_dir(base: &Path) -> Rf2Result<PathBuf> {
    if base.ends_with("Terminology") && base.is_dir() {
        return Ok(base.to_path_buf());
    }

    let snapshot_term = base.join("Snapshot").join("Terminology");
    if snapshot_term.is_dir() {
        return Ok(snapshot_term);
    }

    let term = base.join("Terminology");
    if term.is_dir() {
        return Ok(term);
    }

    // Search one level deep, e.g. a download folder holding the release
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(base)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();

    for subdir in subdirs {
        let sub_snapshot_term = subdir.join("Snapshot").join("Terminology");
        if sub_snapshot_term.is_dir() {
            return Ok(sub_snapshot_term);
        }

        let sub_term = subdir.join("Terminology");
        if sub_term.is_dir() {
            return Ok(sub_term);
        }
    }

    Err(Rf2Error::DirectoryNotFound {
        path: format!("Terminology directory not found in {}", base.display()),
    })
}

/// Extracts release date from RF2 filename.
///
/// RF2 files have names like `sct2_Description_Snapshot-en_INT_20250801.txt`
pub fn extract_release_date(filename: &str) -> Option<String> {
    let without_ext = filename.trim_end_matches(".txt");
    let last = without_ext.rsplit('_').next()?;

    if last.len() == 8 && last.chars().all(|c| c.is_ascii_digit()) {
        Some(last.to_string())
    } else {
        None
    }
}

/// Formats a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
