// src/pipeline/mod.rs

//! Pipeline file loading for pipecheck.
//!
//! Responsibilities:
//! - Define the JSON-backed data model (`model.rs`).
//! - Load a pipeline file from disk and decorate it into the typed graph
//!   view (`loader.rs`).

pub mod loader;
pub mod model;

pub use loader::{load_from_path, load_graph};
pub use model::{ParameterDefault, PipelineFile, PluginRecord};
