//! Comparer constructors.
//!
//! Every constructor takes a label (possibly empty) naming the compared
//! field. Failures are wrapped with that label so the formatter can rebuild
//! the full path.

use crate::comparer::{bind_comparer, Comparer, Comparers};
use crate::diff::engine::evaluate;
use crate::diff::mismatch::{labeled, Mismatch, Mismatches, Outcome};
use std::fmt::Debug;

/// Compare with `PartialEq`, reporting both sides' `Debug` forms.
pub fn comparable<T>(label: impl Into<String>, v: T) -> Box<dyn Comparer>
where
    T: PartialEq + Debug + 'static,
{
    let label = label.into();
    bind_comparer(v, move |v1: &T, v2: &T| {
        if v1 != v2 {
            return Err(Mismatch::value(format!("{v1:?} != {v2:?}")).labeled(label.as_str()));
        }
        Ok(())
    })
}

/// Compare optional values.
///
/// Two `None`s match. When both are present only the inner values are
/// rendered; when one side is absent both sides are rendered in full so the
/// missing one shows up as `None`.
pub fn comparable_option<T>(label: impl Into<String>, v: Option<T>) -> Box<dyn Comparer>
where
    T: PartialEq + Debug + 'static,
{
    let label = label.into();
    bind_comparer(v, move |v1: &Option<T>, v2: &Option<T>| {
        let description = match (v1, v2) {
            (Some(a), Some(b)) if a != b => format!("{a:?} != {b:?}"),
            (Some(_), None) | (None, Some(_)) => format!("{v1:?} != {v2:?}"),
            _ => return Ok(()),
        };
        Err(Mismatch::value(description).labeled(label.as_str()))
    })
}

/// Compare two sequences element by element with `PartialEq`.
///
/// Lines are labeled `label[i]`.
pub fn comparable_slice<T>(label: impl Into<String>, v: Vec<T>) -> Box<dyn Comparer>
where
    T: PartialEq + Debug + Clone + 'static,
{
    slice(label, v, |item: &T| -> Comparers { vec![comparable("", item.clone())] })
}

/// Compare with a caller-supplied function. Its outcome is used as is;
/// `PartialEq` is never consulted.
pub fn func<T, F>(label: impl Into<String>, v: T, diff_fn: F) -> Box<dyn Comparer>
where
    T: 'static,
    F: Fn(&T, &T) -> Outcome + 'static,
{
    let label = label.into();
    bind_comparer(v, move |v1: &T, v2: &T| labeled(diff_fn(v1, v2), &label))
}

/// Compare a nested value through its own decomposition.
pub fn nest<T, F>(label: impl Into<String>, v: T, decompose: F) -> Box<dyn Comparer>
where
    T: 'static,
    F: Fn(&T) -> Comparers + 'static,
{
    let label = label.into();
    bind_comparer(v, move |v1: &T, v2: &T| {
        labeled(evaluate(v1, v2, &decompose), &label)
    })
}

/// Compare two sequences element by element through a decomposition.
///
/// Sequences of different length fail with a single `len: N1 != N2` and no
/// element is compared. Otherwise each element's failures are labeled
/// `label[i]`.
pub fn slice<T, F>(label: impl Into<String>, v: Vec<T>, decompose: F) -> Box<dyn Comparer>
where
    T: 'static,
    F: Fn(&T) -> Comparers + 'static,
{
    let label = label.into();
    bind_comparer(v, move |vs1: &Vec<T>, vs2: &Vec<T>| {
        if vs1.len() != vs2.len() {
            return Err(Mismatch::Length {
                left: vs1.len(),
                right: vs2.len(),
            }
            .labeled(label.as_str()));
        }
        let mut mismatches = Mismatches::new();
        for (index, (v1, v2)) in vs1.iter().zip(vs2).enumerate() {
            let outcome = evaluate(v1, v2, &decompose);
            mismatches.push(labeled(outcome, &format!("{label}[{index}]")));
        }
        mismatches.into_outcome()
    })
}
