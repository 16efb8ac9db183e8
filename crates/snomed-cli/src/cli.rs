//! Command-line arguments and their mapping onto [`ImportConfig`].

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use snomed_loader::{
    discover_description_file, ImportConfig, ReplaceMode, Rf2Result, DEFAULT_BATCH_SIZE,
    DEFAULT_PROGRESS_INTERVAL,
};

const DEFAULT_OUTPUT: &str = "assets/snomed.db";

/// Build the offline SNOMED CT description database.
#[derive(Parser, Debug)]
#[command(name = "snomed-import")]
#[command(version)]
#[command(about = "Import active SNOMED CT descriptions into an indexed SQLite database")]
#[command(group(ArgGroup::new("input").required(true).args(["source", "release_dir"])))]
pub struct Cli {
    /// Path to the RF2 description snapshot (sct2_Description_Snapshot-*.txt)
    #[arg(short, long, env = "SNOMED_DESCRIPTION_PATH")]
    pub source: Option<PathBuf>,

    /// RF2 release directory to search for the description snapshot
    #[arg(short, long, env = "SNOMED_DATA_PATH")]
    pub release_dir: Option<PathBuf>,

    /// Database file to (re)create
    #[arg(short, long, env = "SNOMED_DB_PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Rows per bulk insert
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Imported rows between progress messages
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: usize,

    /// Delete the output first and build it in place instead of swapping it in at the end
    #[arg(long)]
    pub in_place: bool,

    /// Print import statistics as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolves the arguments into an import configuration.
    ///
    /// A release directory is searched for its description snapshot; an
    /// explicit `--source` is used as given, even if it does not exist.
    pub fn to_config(&self) -> Rf2Result<ImportConfig> {
        let source = match (&self.source, &self.release_dir) {
            (Some(source), _) => source.clone(),
            (None, Some(dir)) => discover_description_file(dir)?,
            // clap enforces the "input" group
            (None, None) => PathBuf::new(),
        };

        let mode = if self.in_place {
            ReplaceMode::InPlace
        } else {
            ReplaceMode::Atomic
        };

        Ok(ImportConfig::new(source, &self.output)
            .with_batch_size(self.batch_size)
            .with_progress_interval(self.progress_interval)
            .with_replace_mode(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsString;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["snomed-import", "--source", "desc.txt"]).unwrap();
        let config = cli.to_config().unwrap();
        assert_eq!(config.source_path, PathBuf::from("desc.txt"));
        assert_eq!(config.destination_path, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.batch_size, 10_000);
        assert_eq!(config.progress_interval, 100_000);
        assert_eq!(config.replace_mode, ReplaceMode::Atomic);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "snomed-import",
            "-s",
            "desc.txt",
            "-o",
            "out/terms.db",
            "--batch-size",
            "500",
            "--progress-interval",
            "1000",
            "--in-place",
        ])
        .unwrap();
        let config = cli.to_config().unwrap();
        assert_eq!(config.destination_path, PathBuf::from("out/terms.db"));
        assert_eq!(config.batch_size, 500);
        assert_eq!(config.progress_interval, 1000);
        assert_eq!(config.replace_mode, ReplaceMode::InPlace);
    }

    #[test]
    fn test_source_and_release_dir_conflict() {
        let result = Cli::try_parse_from([
            "snomed-import",
            "--source",
            "a.txt",
            "--release-dir",
            "release",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_release_dir_is_searched() {
        let dir = TempDir::new().unwrap();
        let term = dir.path().join("Snapshot").join("Terminology");
        fs::create_dir_all(&term).unwrap();
        let file = term.join("sct2_Description_Snapshot-en_INT_20250801.txt");
        fs::write(&file, "id\n").unwrap();

        let args: Vec<OsString> = vec![
            "snomed-import".into(),
            "--release-dir".into(),
            dir.path().into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.to_config().unwrap().source_path, file);
    }
}
