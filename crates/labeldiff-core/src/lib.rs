//! labeldiff Core - labeled, deterministic diffs for test assertions
//!
//! This crate compares two values of the same type through an explicit,
//! caller-supplied description of what to compare, and reports every
//! difference as a `path: description` line:
//!
//! - Type-erased comparers collected into one ordered list per type
//! - A recursive diff engine that aggregates every mismatch
//! - A label formatter that rebuilds `a.b[2].c` paths from nested failures
//! - Assertion helpers and a structured error facility for test harnesses
//! - A structured logging facility built on `tracing`
//!
//! ```
//! use labeldiff_core::comparer::{comparable, nest, Comparers};
//! use labeldiff_core::render_diff;
//!
//! #[derive(Clone)]
//! struct Child { f1: i32, f2: String }
//! struct Parent { child: Child }
//!
//! let a = Parent { child: Child { f1: 1, f2: "child1".into() } };
//! let b = Parent { child: Child { f1: 2, f2: "child2".into() } };
//! let diff = render_diff(&a, &b, |p: &Parent| -> Comparers {
//!     vec![nest("Child", p.child.clone(), |c: &Child| -> Comparers {
//!         vec![comparable("F1", c.f1), comparable("F2", c.f2.clone())]
//!     })]
//! });
//! assert_eq!(diff, "Child.F1: 1 != 2\nChild.F2: \"child1\" != \"child2\"");
//! ```

pub mod check;
pub mod comparer;
pub mod diff;
pub mod errors;
pub mod logging_facility;

#[doc(hidden)]
pub use tracing;

pub use labeldiff_core_types as core_types;

// Re-export commonly used types
pub use check::check_diff;
pub use comparer::{
    bind_comparer, comparable, comparable_option, comparable_slice, func, nest, slice, Comparer,
    Comparers, ErasedValue,
};
pub use diff::{diff_lines, render_diff, DiffLine, Mismatch, Outcome};
pub use errors::{ExError, ExErrorKind, Result};
