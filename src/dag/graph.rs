// src/dag/graph.rs

use std::collections::BTreeSet;

use anyhow::{anyhow, Context, Result};

use crate::pipeline::model::{ParameterDefault, PipelineFile, PluginRecord};

/// Name of the parameter through which a plugin declares extra predecessors
/// beyond its `previous_index` (fan-in). Its default value is a
/// comma-separated list of plugin indexes.
pub const INSTANCE_DEPS_PARAM: &str = "plugininstances";

/// One pipeline step, decorated with its derived predecessor set.
///
/// This is an immutable view built once from the raw [`PluginRecord`]s; the
/// raw records themselves are never touched after parsing.
#[derive(Debug, Clone)]
pub struct PluginNode {
    /// 0-based position in the original `plugin_tree`. Doubles as the
    /// node's identity and as the value other nodes reference.
    pub index: usize,
    /// Primary predecessor; `None` exactly for a root.
    pub previous_index: Option<usize>,
    /// Full predecessor set: `previous_index` plus any fan-in extras.
    /// Empty for a root.
    pub predecessors: BTreeSet<usize>,
    /// Optional label, only used in diagnostics.
    pub title: Option<String>,
}

impl PluginNode {
    /// A root is a node with no primary predecessor.
    pub fn is_root(&self) -> bool {
        self.previous_index.is_none()
    }

    /// Label for log output: the title if present, else the bare index.
    pub fn describe(&self) -> String {
        match &self.title {
            Some(title) => format!("#{} ({title})", self.index),
            None => format!("#{}", self.index),
        }
    }
}

/// Ordered sequence of decorated plugin nodes.
///
/// Insertion order is preserved because it is the identity source
/// (`index` = position); it carries no meaning for validity.
#[derive(Debug, Clone)]
pub struct PipelineGraph {
    nodes: Vec<PluginNode>,
}

impl PipelineGraph {
    /// Build the typed graph from a parsed [`PipelineFile`].
    ///
    /// Derives each node's full predecessor set. Fails on malformed
    /// instance-dependency parameters; dangling or cyclic references are
    /// *not* errors here, they are what the validator exists to detect.
    pub fn from_file(pipeline: &PipelineFile) -> Result<Self> {
        let mut nodes = Vec::with_capacity(pipeline.plugin_tree.len());

        for (index, record) in pipeline.plugin_tree.iter().enumerate() {
            nodes.push(decorate(index, record)?);
        }

        Ok(Self { nodes })
    }

    /// Build a graph directly from decorated nodes. Intended for tests and
    /// callers that construct graphs programmatically; indexes are
    /// reassigned from position to keep the identity invariant.
    pub fn from_nodes(nodes: impl IntoIterator<Item = PluginNode>) -> Self {
        let nodes = nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| PluginNode { index, ..node })
            .collect();
        Self { nodes }
    }

    /// Number of nodes in the pipeline.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &PluginNode> {
        self.nodes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&PluginNode> {
        self.nodes.get(index)
    }

    /// Nodes whose *primary* predecessor is `parent`. Fan-in extras do not
    /// count; they only gate eligibility, not discovery.
    pub fn primary_children(&self, parent: usize) -> impl Iterator<Item = &PluginNode> {
        self.nodes
            .iter()
            .filter(move |n| n.previous_index == Some(parent))
    }
}

/// Construct the decorated node for one raw record.
fn decorate(index: usize, record: &PluginRecord) -> Result<PluginNode> {
    let mut predecessors = BTreeSet::new();

    // Every non-root node has at least its primary predecessor; a root has
    // an empty set regardless of any stray fan-in parameters.
    if let Some(previous) = record.previous_index {
        predecessors.insert(previous);

        if let Some(extras) = instance_predecessors(&record.plugin_parameter_defaults)
            .with_context(|| format!("plugin at index {index}"))?
        {
            predecessors.extend(extras);
        }
    }

    Ok(PluginNode {
        index,
        previous_index: record.previous_index,
        predecessors,
        title: record.title.clone(),
    })
}

/// Look up the instance-dependency parameter in a parameter list and parse
/// its value as a set of predecessor indexes.
///
/// Returns `Ok(None)` when no parameter is named [`INSTANCE_DEPS_PARAM`].
/// The value must be a string holding a comma-separated list of integers;
/// anything else is a structural error.
pub fn instance_predecessors(
    params: &[ParameterDefault],
) -> Result<Option<BTreeSet<usize>>> {
    let Some(param) = params.iter().find(|p| p.name == INSTANCE_DEPS_PARAM) else {
        return Ok(None);
    };

    let raw = param.default.as_str().ok_or_else(|| {
        anyhow!(
            "parameter '{INSTANCE_DEPS_PARAM}' must have a string default, got {}",
            param.default
        )
    })?;

    let mut indexes = BTreeSet::new();
    for piece in raw.split(',') {
        let piece = piece.trim();
        let parsed = piece.parse::<usize>().with_context(|| {
            format!("parameter '{INSTANCE_DEPS_PARAM}': invalid index '{piece}'")
        })?;
        indexes.insert(parsed);
    }

    Ok(Some(indexes))
}
