//! Label formatter.
//!
//! Turns a [`Mismatch`] tree into flat report lines. Each leaf becomes one
//! line whose path is the concatenation of every label above it, joined with
//! `.` and skipping empty segments. Index segments arrive pre-rendered as
//! `name[i]`, so the formatter never inserts brackets itself.

use crate::core_types::schema::{DESCRIPTION_SEPARATOR, LINE_SEPARATOR, PATH_SEPARATOR};
use crate::diff::mismatch::{Mismatch, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a diff report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// Dotted/indexed label path; empty when no label applies
    pub path: String,
    /// Leaf description, e.g. `"a" != "b"`
    pub description: String,
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.description)
        } else {
            write!(f, "{}{}{}", self.path, DESCRIPTION_SEPARATOR, self.description)
        }
    }
}

/// Join an inherited path with a node's own segment.
///
/// The separator only appears when both sides are non-empty.
pub fn join_label(inherited: &str, own: &str) -> String {
    match (inherited.is_empty(), own.is_empty()) {
        (true, _) => own.to_string(),
        (false, true) => inherited.to_string(),
        (false, false) => format!("{inherited}{PATH_SEPARATOR}{own}"),
    }
}

/// Render an outcome as newline-joined report lines under `label`.
///
/// Returns `""` for a success.
pub fn format(outcome: &Outcome, label: &str) -> String {
    join_lines(&format_lines(outcome, label))
}

/// Join report lines into the final report text, without a trailing newline.
pub fn join_lines(lines: &[DiffLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

/// Render an outcome as structured report lines under `label`.
pub fn format_lines(outcome: &Outcome, label: &str) -> Vec<DiffLine> {
    let mut lines = Vec::new();
    if let Err(mismatch) = outcome {
        collect_lines(mismatch, label, &mut lines);
    }
    lines
}

fn collect_lines(mismatch: &Mismatch, inherited: &str, lines: &mut Vec<DiffLine>) {
    let nodes = mismatch.flatten();
    match nodes.as_slice() {
        [] => {}
        [node] => collect_single(node, inherited, lines),
        many => {
            for node in many {
                collect_lines(node, inherited, lines);
            }
        }
    }
}

fn collect_single(node: &Mismatch, inherited: &str, lines: &mut Vec<DiffLine>) {
    if node.is_leaf() {
        lines.push(DiffLine {
            path: inherited.to_string(),
            description: node.to_string(),
        });
        return;
    }
    match node {
        Mismatch::Labeled { label, inner } => {
            collect_lines(inner, &join_label(inherited, label), lines);
        }
        // a single-child aggregate nested inside another aggregate
        _ => collect_lines(node, inherited, lines),
    }
}
