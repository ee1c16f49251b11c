//! Memoized pairwise relationship storage.
//!
//! Relationship entries are keyed by an unordered diagram pair, canonicalized
//! through the total order on [`Id`] so that `(a, b)` and `(b, a)` hit the
//! same slot. Entries are computed once per cache generation and dropped
//! wholesale whenever the diagram collection's membership changes; visibility
//! toggles never touch them, since label sets do not change then.

use std::collections::HashMap;

use log::debug;

use constellation_core::{identifier::Id, label::LabelSet};

/// Canonical key for an unordered diagram pair.
///
/// The two ids are stored sorted by the [`Ord`] on [`Id`], so construction
/// from either orientation yields an identical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PairKey {
    lo: Id,
    hi: Id,
}

impl PairKey {
    /// Builds the canonical key for `(a, b)`.
    pub(crate) fn new(a: Id, b: Id) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The smaller id in canonical order.
    pub(crate) fn lo(self) -> Id {
        self.lo
    }

    /// The larger id in canonical order.
    pub(crate) fn hi(self) -> Id {
        self.hi
    }
}

/// The cached relationship between one unordered pair of diagrams.
///
/// Stored in canonical orientation: the subset flags refer to the key's `lo`
/// and `hi` sides. Use [`RelationshipEntry::oriented_flags`] to read them for
/// a specific query order.
///
/// Invariant: both flags are `false` unless `shared_count() > 0`; both are
/// `true` only when the two label sets are equal and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelationshipEntry {
    shared: LabelSet,
    lo_subset_of_hi: bool,
    hi_subset_of_lo: bool,
}

impl RelationshipEntry {
    /// Computes the entry for a pair, given label sets in canonical order.
    fn compute(lo_labels: &LabelSet, hi_labels: &LabelSet) -> Self {
        let shared = lo_labels.shared_with(hi_labels);
        let overlapping = !shared.is_empty();

        Self {
            lo_subset_of_hi: overlapping && lo_labels.is_subset_of(hi_labels),
            hi_subset_of_lo: overlapping && hi_labels.is_subset_of(lo_labels),
            shared,
        }
    }

    /// Number of labels present on both sides.
    pub(crate) fn shared_count(&self) -> usize {
        self.shared.len()
    }

    /// Subset flags oriented for the query order `(a, b)`.
    ///
    /// Returns `(a_subset_of_b, b_subset_of_a)`. `a` must be one side of
    /// `key`.
    pub(crate) fn oriented_flags(&self, key: PairKey, a: Id) -> (bool, bool) {
        if a == key.lo() {
            (self.lo_subset_of_hi, self.hi_subset_of_lo)
        } else {
            (self.hi_subset_of_lo, self.lo_subset_of_hi)
        }
    }
}

/// Memoizing store for [`RelationshipEntry`] values.
///
/// For a fixed diagram collection, repeated lookups for the same pair return
/// value-identical entries. The only writers are [`RelationshipCache::get`]
/// (fills a missing slot) and [`RelationshipCache::invalidate_all`] (drops
/// everything); the canvas calls the latter on every membership change,
/// before the next lookup can observe a stale entry.
#[derive(Debug, Default)]
pub(crate) struct RelationshipCache {
    entries: HashMap<PairKey, RelationshipEntry>,
}

impl RelationshipCache {
    /// Returns the entry for `key`, computing and storing it on first access.
    ///
    /// `lo_labels` and `hi_labels` must be the label sets of `key.lo()` and
    /// `key.hi()` respectively; the caller resolves them from the diagram
    /// collection.
    pub(crate) fn get(
        &mut self,
        key: PairKey,
        lo_labels: &LabelSet,
        hi_labels: &LabelSet,
    ) -> &RelationshipEntry {
        self.entries
            .entry(key)
            .or_insert_with(|| RelationshipEntry::compute(lo_labels, hi_labels))
    }

    /// Drops every entry.
    pub(crate) fn invalidate_all(&mut self) {
        if !self.entries.is_empty() {
            debug!(dropped = self.entries.len(); "Relationship cache invalidated");
        }
        self.entries.clear();
    }

    /// Number of memoized pairs.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
