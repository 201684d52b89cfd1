// src/lib.rs

pub mod cli;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod pipeline;
pub mod report;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::dag::{validate, Verdict};
use crate::errors::Result;
use crate::pipeline::load_graph;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - pipeline loading (file → raw records → decorated graph)
/// - the validator
/// - verdict reporting
///
/// Returns the verdict so the caller can map it to an exit status; I/O and
/// parse failures come back as errors instead.
pub fn run(args: CliArgs) -> Result<Verdict> {
    let graph = load_graph(&args.pipeline)?;
    debug!(nodes = graph.len(), path = %args.pipeline, "pipeline graph loaded");

    let verdict = validate(&graph);
    info!(valid = verdict.is_valid(), "validation finished");

    report::print_verdict(&verdict, args.show_order);
    Ok(verdict)
}
