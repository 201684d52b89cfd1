// src/pipeline/loader.rs

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::dag::PipelineGraph;
use crate::errors::Result;
use crate::pipeline::model::PipelineFile;

/// Load a pipeline file from a given path and return the raw `PipelineFile`.
///
/// This only performs JSON deserialization; it does **not** derive
/// predecessor sets or judge graph validity. Use [`load_graph`] for the
/// typed graph view.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<PipelineFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading pipeline file at {:?}", path))?;

    let pipeline: PipelineFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing JSON pipeline from {:?}", path))?;

    Ok(pipeline)
}

/// Load a pipeline file from path and build the typed graph.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads JSON.
/// - Decorates each record with its derived full predecessor set
///   (primary `previous_index` plus any `plugininstances` extras).
///
/// Malformed instance-dependency parameters (non-string values, pieces that
/// are not integers) surface here as structural errors, not as a validation
/// verdict.
pub fn load_graph(path: impl AsRef<Path>) -> Result<PipelineGraph> {
    let path = path.as_ref();
    let pipeline = load_from_path(path)?;
    PipelineGraph::from_file(&pipeline)
        .with_context(|| format!("building pipeline graph from {:?}", path))
}
