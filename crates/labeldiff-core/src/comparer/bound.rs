//! The generic comparer behind every constructor.

use crate::comparer::{Comparer, ErasedValue};
use crate::diff::mismatch::{Mismatch, Outcome};
use std::any::{type_name, Any};

/// A value of type `T` bound to a typed comparison function.
pub struct BoundComparer<T, F> {
    value: T,
    diff_fn: F,
}

impl<T, F> BoundComparer<T, F>
where
    T: Any,
    F: Fn(&T, &T) -> Outcome,
{
    pub fn new(value: T, diff_fn: F) -> Self {
        Self { value, diff_fn }
    }

    fn recover<'a>(&self, erased: &'a dyn ErasedValue) -> Result<&'a T, Mismatch> {
        erased.as_any().downcast_ref::<T>().ok_or_else(|| {
            let actual = ErasedValue::type_name(erased);
            tracing::warn!(
                component = module_path!(),
                expected = type_name::<T>(),
                type_name = actual,
                "comparer received a value of unexpected type"
            );
            Mismatch::InvalidType { type_name: actual }
        })
    }
}

impl<T, F> Comparer for BoundComparer<T, F>
where
    T: Any,
    F: Fn(&T, &T) -> Outcome,
{
    fn value(&self) -> &dyn ErasedValue {
        &self.value
    }

    fn diff(&self, a: &dyn ErasedValue, b: &dyn ErasedValue) -> Outcome {
        let v1 = self.recover(a)?;
        let v2 = self.recover(b)?;
        (self.diff_fn)(v1, v2)
    }
}

/// Bind `value` to `diff_fn`, erasing its type.
///
/// This is the escape hatch for comparison logic the other constructors do
/// not cover. The returned outcome is not labeled; wrap it with
/// [`labeled`](crate::diff::mismatch::labeled) if a path segment is wanted.
pub fn bind_comparer<T, F>(value: T, diff_fn: F) -> Box<dyn Comparer>
where
    T: Any,
    F: Fn(&T, &T) -> Outcome + 'static,
{
    Box::new(BoundComparer::new(value, diff_fn))
}
