//! Diff evaluation engine.
//!
//! The core entry point is [`render_diff`], which decomposes both values into
//! comparers, evaluates every positional pair and renders the collected
//! mismatches as a report.

use crate::comparer::Comparers;
use crate::diff::format::{format_lines, join_lines, DiffLine};
use crate::diff::mismatch::{Mismatch, Mismatches, Outcome};
use crate::{log_op_end, log_op_start};
use std::time::Instant;

/// Compare `v1` against `v2` through `decompose`.
///
/// Both values are decomposed and the resulting comparers are paired by
/// index. Every pair is evaluated; all failures are collected in declaration
/// order. When the two decompositions yield a different number of comparers
/// no pair is compared and a single [`Mismatch::Arity`] is returned.
pub fn evaluate<T, F>(v1: &T, v2: &T, decompose: &F) -> Outcome
where
    T: ?Sized,
    F: Fn(&T) -> Comparers + ?Sized,
{
    let left = decompose(v1);
    let right = decompose(v2);

    if left.len() != right.len() {
        tracing::debug!(
            component = module_path!(),
            left_len = left.len() as u64,
            right_len = right.len() as u64,
            "decompositions disagree on comparer count"
        );
        return Err(Mismatch::Arity {
            left: left.len(),
            right: right.len(),
        });
    }

    let mut mismatches = Mismatches::new();
    for (c1, c2) in left.iter().zip(right.iter()) {
        mismatches.push(c1.diff(c1.value(), c2.value()));
    }
    mismatches.into_outcome()
}

/// Compute the diff between `v1` and `v2` as structured report lines.
///
/// Returns an empty vector when nothing differs.
pub fn diff_lines<T, F>(v1: &T, v2: &T, decompose: F) -> Vec<DiffLine>
where
    T: ?Sized,
    F: Fn(&T) -> Comparers,
{
    run("diff_lines", v1, v2, &decompose)
}

/// Render the diff between `v1` and `v2`.
///
/// One line per leaf mismatch, `path: description` (or just the description
/// when the path is empty), joined with `\n` without a trailing newline.
/// Returns `""` when nothing differs.
///
/// ```
/// use labeldiff_core::comparer::{comparable, slice, Comparers};
/// use labeldiff_core::render_diff;
///
/// #[derive(Clone)]
/// struct Item { key: String }
/// struct Object { id: u32, items: Vec<Item> }
///
/// fn object(o: &Object) -> Comparers {
///     vec![
///         comparable("ID", o.id),
///         slice("Items", o.items.clone(), |i: &Item| -> Comparers {
///             vec![comparable("Key", i.key.clone())]
///         }),
///     ]
/// }
///
/// let a = Object { id: 1, items: vec![Item { key: "x".into() }] };
/// let b = Object { id: 2, items: vec![Item { key: "y".into() }] };
/// assert_eq!(render_diff(&a, &b, object), "ID: 1 != 2\nItems[0].Key: \"x\" != \"y\"");
/// ```
pub fn render_diff<T, F>(v1: &T, v2: &T, decompose: F) -> String
where
    T: ?Sized,
    F: Fn(&T) -> Comparers,
{
    join_lines(&run("render_diff", v1, v2, &decompose))
}

fn run<T, F>(op: &'static str, v1: &T, v2: &T, decompose: &F) -> Vec<DiffLine>
where
    T: ?Sized,
    F: Fn(&T) -> Comparers,
{
    let start = Instant::now();
    log_op_start!(op);

    let lines = format_lines(&evaluate(v1, v2, decompose), "");

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        mismatches = lines.len() as u64
    );
    lines
}
