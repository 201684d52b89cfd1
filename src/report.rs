// src/report.rs

//! Turning a [`Verdict`] into user-visible output and an exit status.
//!
//! Kept apart from the validator so the core stays a pure function; this is
//! the only place that knows about message wording and process exit codes.

use crate::dag::{InvalidReason, Verdict};

/// One-line human-readable message for a verdict.
pub fn describe(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Valid { .. } => {
            "pipeline is valid! it is a single, connected, directed acyclic graph."
                .to_string()
        }
        Verdict::Invalid { reason, scheduled } => match reason {
            InvalidReason::NoRoot => "pipeline is invalid: has no root!".to_string(),
            InvalidReason::MultipleRoots => {
                "pipeline is invalid: has more than one root!".to_string()
            }
            InvalidReason::Disconnected => format!(
                "pipeline is invalid: disconnected! (scheduled so far: {scheduled:?})"
            ),
            InvalidReason::Blocked => {
                "pipeline is invalid: a previous is unvisited, possibly cyclic or has \
                 a parent which is not part of this pipeline!"
                    .to_string()
            }
        },
    }
}

/// Print the verdict, optionally followed by the computed scheduling order.
pub fn print_verdict(verdict: &Verdict, show_order: bool) {
    println!("{}", describe(verdict));

    if show_order {
        if let Verdict::Valid { order } = verdict {
            println!("scheduling order: {order:?}");
        }
    }
}

/// Process exit status for a verdict: 0 iff valid.
pub fn exit_code(verdict: &Verdict) -> i32 {
    if verdict.is_valid() { 0 } else { 1 }
}
