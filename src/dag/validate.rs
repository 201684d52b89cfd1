// src/dag/validate.rs

use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use crate::dag::graph::{PipelineGraph, PluginNode};

/// Why a pipeline failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// No node has a null `previous_index`.
    NoRoot,
    /// More than one node has a null `previous_index`.
    MultipleRoots,
    /// The scheduling frontier emptied before every node was scheduled:
    /// some nodes can never be reached from the root.
    Disconnected,
    /// Candidate nodes repeatedly failed to have their predecessors
    /// satisfied. Covers both cycles and predecessors that are not part of
    /// the pipeline, without distinguishing between them.
    Blocked,
}

/// Outcome of validating one pipeline graph.
///
/// Both variants carry the indexes scheduled up to that point, in
/// scheduling order, for diagnostics. The *verdict* is deterministic for a
/// given graph; only the order may vary with tie-breaks among siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every node was scheduled with all its predecessors satisfied
    /// beforehand: the pipeline is a single, connected DAG.
    Valid { order: Vec<usize> },
    /// Validation stopped at the first detected invalidity.
    Invalid {
        reason: InvalidReason,
        scheduled: Vec<usize>,
    },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }
}

/// Decide whether `graph` is a single, connected, directed acyclic graph by
/// simulating the scheduling order an execution engine would use.
///
/// Starting from the unique root, nodes become eligible only once all of
/// their predecessors have been scheduled. Discovery is breadth-first over
/// primary-predecessor edges; eligibility is re-checked per level so that a
/// fan-in node may wait for siblings discovered in the same expansion.
///
/// Pure function of the graph: no I/O, no retained state between calls.
pub fn validate(graph: &PipelineGraph) -> Verdict {
    let root = match find_root(graph) {
        Ok(root) => root,
        Err(reason) => {
            return Verdict::Invalid {
                reason,
                scheduled: Vec::new(),
            };
        }
    };
    debug!(root = %root.describe(), "root discovered; starting scheduling simulation");

    let mut scheduled = vec![root.index];
    let mut visited: BTreeSet<usize> = BTreeSet::from([root.index]);
    let mut frontier: VecDeque<usize> = VecDeque::from([root.index]);

    while scheduled.len() < graph.len() {
        let Some(parent) = frontier.pop_front() else {
            // Nothing left to expand, yet nodes remain unscheduled.
            return Verdict::Invalid {
                reason: InvalidReason::Disconnected,
                scheduled,
            };
        };

        // Children found here are candidates, not yet scheduled: a fan-in
        // child may still be waiting on predecessors from other branches.
        let mut children: Vec<&PluginNode> = graph.primary_children(parent).collect();

        // Fixpoint over the candidate set. Each pass schedules every child
        // whose full predecessor set is already visited; a pass that
        // schedules nothing while children remain means those children can
        // never become eligible.
        while !children.is_empty() {
            let (ready, deferred): (Vec<_>, Vec<_>) = children
                .into_iter()
                .partition(|c| c.predecessors.is_subset(&visited));

            if ready.is_empty() {
                return Verdict::Invalid {
                    reason: InvalidReason::Blocked,
                    scheduled,
                };
            }

            for child in ready {
                debug!(node = %child.describe(), "predecessors satisfied; scheduling");
                scheduled.push(child.index);
                visited.insert(child.index);
                frontier.push_back(child.index);
            }

            children = deferred;
        }
    }

    Verdict::Valid { order: scheduled }
}

/// Select the unique root, or classify the failure.
fn find_root(graph: &PipelineGraph) -> Result<&PluginNode, InvalidReason> {
    let mut roots = graph.nodes().filter(|n| n.is_root());

    let Some(first) = roots.next() else {
        return Err(InvalidReason::NoRoot);
    };
    if roots.next().is_some() {
        return Err(InvalidReason::MultipleRoots);
    }
    Ok(first)
}
