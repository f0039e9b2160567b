//! Diff outcome types.
//!
//! A comparison either succeeds or yields a [`Mismatch`]. Mismatches form a
//! tree: leaves describe a single difference, [`Mismatch::Labeled`] attaches
//! one path segment to its inner node, and [`Mismatch::Aggregate`] holds every
//! failure found at one nesting level, in declaration order.

use thiserror::Error;

/// Result of comparing two values: `Ok(())` when they match.
pub type Outcome = std::result::Result<(), Mismatch>;

/// A described difference between two values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Free-form leaf description, e.g. `1 != 2`
    #[error("{0}")]
    Value(String),

    /// Two sequences have different lengths; no element was compared
    #[error("len: {left} != {right}")]
    Length { left: usize, right: usize },

    /// The two sides decomposed into a different number of comparers
    #[error("comparers: {left} != {right}")]
    Arity { left: usize, right: usize },

    /// A comparer was handed a value it cannot recover as its bound type
    #[error("invalid type: {type_name}")]
    InvalidType { type_name: &'static str },

    /// A path segment wrapping the mismatch found beneath it
    #[error("{inner}")]
    Labeled { label: String, inner: Box<Mismatch> },

    /// Every mismatch found at one nesting level
    #[error("{}", join_messages(.0))]
    Aggregate(Vec<Mismatch>),
}

fn join_messages(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Mismatch {
    /// Create a free-form leaf mismatch.
    pub fn value(description: impl Into<String>) -> Self {
        Mismatch::Value(description.into())
    }

    /// Wrap this mismatch with a path segment. Empty labels are kept and
    /// elided later by the formatter.
    pub fn labeled(self, label: impl Into<String>) -> Self {
        Mismatch::Labeled {
            label: label.into(),
            inner: Box::new(self),
        }
    }

    /// Nodes at this level: an aggregate yields its children, anything else
    /// yields itself.
    pub fn flatten(&self) -> Vec<&Mismatch> {
        match self {
            Mismatch::Aggregate(children) => children.iter().collect(),
            other => vec![other],
        }
    }

    /// True for nodes that carry a description rather than wrapping others.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Mismatch::Labeled { .. } | Mismatch::Aggregate(_))
    }

    /// Number of leaf mismatches in this tree, i.e. the number of report lines.
    pub fn leaf_count(&self) -> usize {
        match self {
            Mismatch::Labeled { inner, .. } => inner.leaf_count(),
            Mismatch::Aggregate(children) => children.iter().map(Mismatch::leaf_count).sum(),
            _ => 1,
        }
    }
}

/// Attach `label` to a failed outcome; successes pass through untouched.
pub fn labeled(outcome: Outcome, label: &str) -> Outcome {
    outcome.map_err(|mismatch| mismatch.labeled(label))
}

/// Collapse a list of mismatches into one outcome.
pub fn combine(mismatches: Vec<Mismatch>) -> Outcome {
    let mut acc = Mismatches::new();
    for mismatch in mismatches {
        acc.push(Err(mismatch));
    }
    acc.into_outcome()
}

/// Accumulates failures without short-circuiting.
///
/// Pushed aggregates are spliced in place so the result stays one level deep
/// at each label.
#[derive(Debug, Default)]
pub struct Mismatches(Vec<Mismatch>);

impl Mismatches {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record an outcome; `Ok(())` and failures without any leaf are ignored.
    pub fn push(&mut self, outcome: Outcome) {
        match outcome {
            Ok(()) => {}
            Err(mismatch) if mismatch.leaf_count() == 0 => {}
            Err(Mismatch::Aggregate(children)) => {
                for child in children {
                    self.push(Err(child));
                }
            }
            Err(mismatch) => self.0.push(mismatch),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing failed, the lone mismatch when exactly one
    /// failed, an aggregate otherwise.
    pub fn into_outcome(mut self) -> Outcome {
        match self.0.len() {
            0 => Ok(()),
            1 => Err(self.0.remove(0)),
            _ => Err(Mismatch::Aggregate(self.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_display() {
        assert_eq!(Mismatch::value("1 != 2").to_string(), "1 != 2");
        assert_eq!(
            Mismatch::Length { left: 2, right: 3 }.to_string(),
            "len: 2 != 3"
        );
        assert_eq!(
            Mismatch::Arity { left: 1, right: 0 }.to_string(),
            "comparers: 1 != 0"
        );
        assert_eq!(
            Mismatch::InvalidType { type_name: "i32" }.to_string(),
            "invalid type: i32"
        );
    }

    #[test]
    fn test_labeled_display_is_inner_description() {
        let m = Mismatch::value("a != b").labeled("field");
        assert_eq!(m.to_string(), "a != b");
    }

    #[test]
    fn test_aggregate_display_joins_children() {
        let m = Mismatch::Aggregate(vec![Mismatch::value("x"), Mismatch::value("y")]);
        assert_eq!(m.to_string(), "x; y");
    }

    #[test]
    fn test_labeled_passes_success_through() {
        assert_eq!(labeled(Ok(()), "field"), Ok(()));
        assert_eq!(
            labeled(Err(Mismatch::value("x")), "field"),
            Err(Mismatch::value("x").labeled("field"))
        );
    }

    #[test]
    fn test_combine_cardinality() {
        assert_eq!(combine(vec![]), Ok(()));
        assert_eq!(
            combine(vec![Mismatch::value("x")]),
            Err(Mismatch::value("x"))
        );
        assert_eq!(
            combine(vec![Mismatch::value("x"), Mismatch::value("y")]),
            Err(Mismatch::Aggregate(vec![
                Mismatch::value("x"),
                Mismatch::value("y")
            ]))
        );
    }

    #[test]
    fn test_push_splices_aggregates() {
        let mut acc = Mismatches::new();
        acc.push(Ok(()));
        acc.push(Err(Mismatch::value("a")));
        acc.push(Err(Mismatch::Aggregate(vec![
            Mismatch::value("b"),
            Mismatch::value("c"),
        ])));
        assert_eq!(acc.len(), 3);
        assert_eq!(
            acc.into_outcome(),
            Err(Mismatch::Aggregate(vec![
                Mismatch::value("a"),
                Mismatch::value("b"),
                Mismatch::value("c"),
            ]))
        );
    }

    #[test]
    fn test_push_keeps_labeled_aggregates_intact() {
        let nested = Mismatch::Aggregate(vec![Mismatch::value("b"), Mismatch::value("c")])
            .labeled("child");
        let mut acc = Mismatches::new();
        acc.push(Err(nested.clone()));
        assert_eq!(acc.into_outcome(), Err(nested));
    }

    #[test]
    fn test_push_drops_failures_without_leaves() {
        let mut acc = Mismatches::new();
        acc.push(Err(Mismatch::Aggregate(vec![])));
        acc.push(Err(Mismatch::Aggregate(vec![]).labeled("v")));
        acc.push(Err(Mismatch::Aggregate(vec![Mismatch::Aggregate(vec![])]).labeled("w")));
        assert!(acc.is_empty());
        assert_eq!(acc.into_outcome(), Ok(()));

        assert_eq!(combine(vec![Mismatch::Aggregate(vec![])]), Ok(()));

        let mut acc = Mismatches::new();
        acc.push(Err(Mismatch::Aggregate(vec![
            Mismatch::value("a"),
            Mismatch::Aggregate(vec![]),
        ])));
        assert_eq!(acc.into_outcome(), Err(Mismatch::value("a")));
    }

    #[test]
    fn test_leaf_count() {
        let tree = Mismatch::Aggregate(vec![
            Mismatch::value("a").labeled("x"),
            Mismatch::Aggregate(vec![Mismatch::value("b"), Mismatch::value("c")]).labeled("y"),
        ]);
        assert_eq!(tree.leaf_count(), 3);
        assert!(!tree.is_leaf());
        assert!(Mismatch::value("a").is_leaf());
    }

    #[test]
    fn test_flatten() {
        let leaf = Mismatch::value("a");
        assert_eq!(leaf.flatten(), vec![&leaf]);

        let agg = Mismatch::Aggregate(vec![Mismatch::value("a"), Mismatch::value("b")]);
        assert_eq!(agg.flatten().len(), 2);
    }
}
