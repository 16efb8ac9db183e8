//! # snomed-cli
//!
//! Command-line front end for [`snomed_loader`]: resolves the source and
//! output paths from arguments or the environment and runs one import.

#![warn(missing_docs)]

pub mod cli;

pub use cli::Cli;
