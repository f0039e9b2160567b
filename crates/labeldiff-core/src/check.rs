//! Assertion helpers built on the diff engine.

use crate::comparer::Comparers;
use crate::diff::engine::evaluate;
use crate::errors::{ExError, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Compare `v1` against `v2`, failing with a structured error on difference.
///
/// The error's message is the full report and its kind classifies the
/// failure (see [`ExErrorKind::classify`](crate::errors::ExErrorKind::classify)).
///
/// # Errors
///
/// - `ValueMismatch` / `LengthMismatch` / `ArityMismatch` / `InvalidType`:
///   exactly one line differs, of that kind
/// - `DiffFound`: more than one line differs
pub fn check_diff<T, F>(v1: &T, v2: &T, decompose: F) -> Result<()>
where
    T: ?Sized,
    F: Fn(&T) -> Comparers,
{
    let start = Instant::now();
    log_op_start!("check_diff");

    let outcome = evaluate(v1, v2, &decompose);
    let duration_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(()) => {
            log_op_end!("check_diff", duration_ms = duration_ms, mismatches = 0u64);
            Ok(())
        }
        Err(mismatch) => {
            let err = ExError::from(mismatch).with_op("check_diff");
            log_op_error!(
                "check_diff",
                err.clone(),
                duration_ms = duration_ms,
                mismatches = err.mismatch_count() as u64
            );
            Err(err)
        }
    }
}

/// Assert that two values show no difference under a decomposition.
///
/// Panics with the rendered report otherwise. Both operands are taken by
/// reference, so pass the values themselves.
///
/// ```
/// use labeldiff_core::assert_no_diff;
/// use labeldiff_core::comparer::{comparable, Comparers};
///
/// assert_no_diff!(1, 1, |v: &i32| -> Comparers { vec![comparable("v", *v)] });
/// ```
///
/// ```should_panic
/// use labeldiff_core::assert_no_diff;
/// use labeldiff_core::comparer::{comparable, Comparers};
///
/// assert_no_diff!(1, 2, |v: &i32| -> Comparers { vec![comparable("v", *v)] });
/// ```
#[macro_export]
macro_rules! assert_no_diff {
    ($left:expr, $right:expr, $decompose:expr $(,)?) => {{
        let report = $crate::diff::render_diff(&$left, &$right, $decompose);
        if !report.is_empty() {
            panic!("values differ:\n{}", report);
        }
    }};
}
