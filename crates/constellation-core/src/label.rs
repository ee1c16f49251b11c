//! Label sets: the distinct label values a diagram declares.
//!
//! A diagram's relationships are defined purely by set membership over its
//! label strings. [`LabelSet`] collapses duplicates and keeps first-insertion
//! order, so every list derived from it (shared labels, connection output) is
//! deterministic across runs.

use indexmap::IndexSet;

use crate::identifier::Id;

/// A de-duplicated, insertion-ordered set of label identifiers.
///
/// Equality is set equality; iteration order is first-insertion order.
///
/// # Examples
///
/// ```
/// use constellation_core::{identifier::Id, label::LabelSet};
///
/// let mut labels = LabelSet::new();
/// labels.insert(Id::new("orders"));
/// labels.insert(Id::new("shipping"));
/// labels.insert(Id::new("orders"));
///
/// assert_eq!(labels.len(), 2);
/// assert!(labels.contains(Id::new("shipping")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: IndexSet<Id>,
}

impl LabelSet {
    /// Creates an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a label, returning `true` if it was not already present.
    pub fn insert(&mut self, label: Id) -> bool {
        self.labels.insert(label)
    }

    /// Returns the number of distinct labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Checks whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Checks whether the given label is present.
    pub fn contains(&self, label: Id) -> bool {
        self.labels.contains(&label)
    }

    /// Returns an iterator over the labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Id> + '_ {
        self.labels.iter().copied()
    }

    /// Returns the labels present in both `self` and `other`.
    ///
    /// The result keeps `self`'s insertion order.
    pub fn shared_with(&self, other: &LabelSet) -> LabelSet {
        self.labels
            .iter()
            .copied()
            .filter(|label| other.contains(*label))
            .collect()
    }

    /// Checks whether every label in `self` is also in `other`.
    ///
    /// The empty set is a subset of everything, including itself; the
    /// relationship classifier separately requires a non-empty overlap
    /// before it treats a subset as meaningful.
    pub fn is_subset_of(&self, other: &LabelSet) -> bool {
        self.labels.iter().all(|label| other.contains(*label))
    }
}

impl FromIterator<Id> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for LabelSet {
    /// Convenience for building sets from string literals, mostly in tests.
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(Id::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_insert_collapses_duplicates() {
        let mut labels = LabelSet::new();
        assert!(labels.insert(Id::new("a")));
        assert!(labels.insert(Id::new("b")));
        assert!(!labels.insert(Id::new("a")));

        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let labels: LabelSet = ["gamma", "alpha", "beta"].into_iter().collect();
        let order: Vec<String> = labels.iter().map(|id| id.resolve()).collect();

        assert_eq!(order, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: LabelSet = ["x", "y"].into_iter().collect();
        let b: LabelSet = ["y", "x"].into_iter().collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_shared_with() {
        let a: LabelSet = ["p", "q", "r"].into_iter().collect();
        let b: LabelSet = ["r", "p", "z"].into_iter().collect();

        let shared = a.shared_with(&b);
        assert_eq!(shared.len(), 2);
        assert!(shared.contains(Id::new("p")));
        assert!(shared.contains(Id::new("r")));
        assert!(!shared.contains(Id::new("z")));

        // Keeps self's order, not other's.
        let order: Vec<String> = shared.iter().map(|id| id.resolve()).collect();
        assert_eq!(order, vec!["p", "r"]);
    }

    #[test]
    fn test_shared_with_disjoint() {
        let a: LabelSet = ["p", "q"].into_iter().collect();
        let b: LabelSet = ["x", "y"].into_iter().collect();

        assert!(a.shared_with(&b).is_empty());
    }

    #[test]
    fn test_is_subset_of() {
        let small: LabelSet = ["p", "q"].into_iter().collect();
        let big: LabelSet = ["p", "q", "r"].into_iter().collect();
        let empty = LabelSet::new();

        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(small.is_subset_of(&small));
        assert!(empty.is_subset_of(&small));
        assert!(empty.is_subset_of(&empty));
    }

    proptest! {
        #[test]
        fn prop_shared_is_subset_of_both(
            left in proptest::collection::vec("[a-e]", 0..8),
            right in proptest::collection::vec("[a-e]", 0..8),
        ) {
            let a: LabelSet = left.iter().map(|s| s.as_str()).collect();
            let b: LabelSet = right.iter().map(|s| s.as_str()).collect();

            let shared = a.shared_with(&b);
            prop_assert!(shared.is_subset_of(&a));
            prop_assert!(shared.is_subset_of(&b));
            prop_assert_eq!(shared.clone(), b.shared_with(&a));
        }

        #[test]
        fn prop_from_iter_deduplicates(labels in proptest::collection::vec("[a-c]", 0..12)) {
            let set: LabelSet = labels.iter().map(|s| s.as_str()).collect();
            let distinct: std::collections::HashSet<&str> =
                labels.iter().map(|s| s.as_str()).collect();

            prop_assert_eq!(set.len(), distinct.len());
        }
    }
}
