//! Labeled diff engine.
//!
//! Compares two values of the same type through a caller-supplied
//! decomposition and produces a deterministic, line-oriented report of every
//! labeled sub-path that differs.
//!
//! ## Entry point
//!
//! ```ignore
//! use labeldiff_core::diff::render_diff;
//!
//! let report = render_diff(&expected, &actual, decompose);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical reports.
//! - **No short-circuit**: every described mismatch is reported, not just the
//!   first one.
//! - **Stable order**: lines follow declaration order and, within sequences,
//!   index order.
//! - **Only what is described**: fields absent from the decomposition are
//!   never compared.

pub mod engine;
pub mod format;
pub mod mismatch;

pub use engine::{diff_lines, evaluate, render_diff};
pub use format::DiffLine;
pub use mismatch::{Mismatch, Outcome};
