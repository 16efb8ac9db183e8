//! SNOMED CT description database builder.

use clap::Parser;
use snomed_cli::Cli;
use snomed_loader::{extract_release_date, format_bytes, import_descriptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let config = cli.to_config()?;
    let source = &config.source_path;

    if let Ok(meta) = std::fs::metadata(source) {
        let release = source
            .file_name()
            .and_then(|n| extract_release_date(&n.to_string_lossy()));
        tracing::info!(
            "Source: {} ({}, release {})",
            source.display(),
            format_bytes(meta.len()),
            release.as_deref().unwrap_or("unknown")
        );
    }

    match import_descriptions(&config) {
        Ok(stats) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
            Ok(())
        }
        // A missing source skips the import without failing the process.
        Err(e) if e.is_missing_source() => {
            tracing::error!("Error: Source file not found at {}", source.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Import failed: {}", e);
            Err(e.into())
        }
    }
}
