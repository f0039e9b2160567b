//! Type-erased comparers.
//!
//! A [`Comparer`] pairs one side's value with the logic used to compare it
//! against the other side. Because the value's type is hidden behind the
//! trait, comparers for differently typed fields can live in one ordered
//! [`Comparers`] list.
//!
//! ```
//! use labeldiff_core::comparer::{comparable, Comparers};
//! use labeldiff_core::render_diff;
//!
//! let diff = render_diff("A", "B", |v: &str| -> Comparers {
//!     vec![comparable("v", v.to_string())]
//! });
//! assert_eq!(diff, r#"v: "A" != "B""#);
//! ```

pub mod bound;
pub mod constructors;

pub use bound::{bind_comparer, BoundComparer};
pub use constructors::{comparable, comparable_option, comparable_slice, func, nest, slice};

use crate::diff::mismatch::Outcome;
use std::any::Any;
use std::fmt;

/// Ordered list of comparers produced by a decomposition function.
///
/// The two sides' lists are paired by position.
pub type Comparers = Vec<Box<dyn Comparer>>;

/// A value whose concrete type has been erased.
///
/// Implemented for every `'static` type. Besides downcasting it reports the
/// concrete type name, which is what a comparer shows when handed a value of
/// the wrong type.
pub trait ErasedValue: Any {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any> ErasedValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A self-contained unit of comparison.
pub trait Comparer {
    /// The bound value, type-erased.
    fn value(&self) -> &dyn ErasedValue;

    /// Recover both inputs as the bound type and compare them.
    ///
    /// An input of the wrong type yields [`Mismatch::InvalidType`] without
    /// running the comparison.
    ///
    /// [`Mismatch::InvalidType`]: crate::diff::mismatch::Mismatch::InvalidType
    fn diff(&self, a: &dyn ErasedValue, b: &dyn ErasedValue) -> Outcome;
}

impl fmt::Debug for dyn Comparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparer")
            .field("value_type", &ErasedValue::type_name(self.value()))
            .finish()
    }
}
