// src/dag/mod.rs

//! DAG view and validation.
//!
//! - [`graph`] holds the immutable, decorated view of the pipeline's
//!   plugin nodes.
//! - [`validate`] contains the scheduling simulation that decides whether
//!   the pipeline is a single, connected, directed acyclic graph.

pub mod graph;
pub mod validate;

pub use graph::{instance_predecessors, PipelineGraph, PluginNode, INSTANCE_DEPS_PARAM};
pub use validate::{validate, InvalidReason, Verdict};
