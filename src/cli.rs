// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pipecheck`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pipecheck",
    version,
    about = "Check that a pipeline file is a single, connected, directed acyclic graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the pipeline file (JSON with a `plugin_tree` array).
    #[arg(value_name = "PIPELINE")]
    pub pipeline: String,

    /// Also print the computed scheduling order for a valid pipeline.
    #[arg(long)]
    pub show_order: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PIPECHECK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
