// src/pipeline/model.rs

use serde::Deserialize;
use serde_json::Value;

/// Top-level pipeline description as read from a JSON file.
///
/// This is a direct mapping of the on-disk format:
///
/// ```json
/// {
///   "plugin_tree": [
///     { "previous_index": null },
///     { "previous_index": 0,
///       "plugin_parameter_defaults": [
///         { "name": "plugininstances", "default": "0" }
///       ] }
///   ]
/// }
/// ```
///
/// Deserialization assumes the file is well-formed JSON coherent to this
/// shape; whether the described graph is *valid* is decided later by the
/// validator.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineFile {
    /// All plugin records, in file order. The position of a record in this
    /// list is its identity: other records reference it by that index.
    pub plugin_tree: Vec<PluginRecord>,
}

/// One entry of `plugin_tree`.
///
/// Fields not listed here (plugin name, version, ...) are ignored on
/// deserialization; only connectivity-relevant data is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginRecord {
    /// Index of this plugin's primary predecessor, or `null` for the root.
    pub previous_index: Option<usize>,

    /// Optional human-readable label, carried through for diagnostics.
    #[serde(default)]
    pub title: Option<String>,

    /// Default values for the plugin's parameters. A missing list is
    /// equivalent to an empty one.
    #[serde(default)]
    pub plugin_parameter_defaults: Vec<ParameterDefault>,
}

/// A named parameter default.
///
/// `default` is kept as a raw JSON value: most parameters carry defaults we
/// never look at (strings, numbers, booleans), and only the instance-
/// dependency sentinel parameter is required to hold a string.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDefault {
    pub name: String,
    pub default: Value,
}
