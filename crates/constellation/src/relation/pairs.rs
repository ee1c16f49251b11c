//! All-pairs candidate enumeration.
//!
//! The candidate list is the full set of classified connections over every
//! unordered diagram pair, ignoring visibility — visibility is applied later
//! so the pairwise classification work is shared across visibility changes.
//! The list carries an explicit validity flag: membership mutations clear it,
//! and the next connection query rebuilds it lazily. Nothing else writes the
//! flag.

use indexmap::IndexMap;
use log::debug;

use constellation_core::identifier::Id;

use crate::canvas::Diagram;
use crate::relation::{
    Connection, classify,
    cache::{PairKey, RelationshipCache},
};

/// Lazily rebuilt list of candidate connections over the full collection.
#[derive(Debug, Default)]
pub(crate) struct CandidateList {
    connections: Vec<Connection>,
    valid: bool,
}

impl CandidateList {
    /// Clears the list and marks it stale.
    ///
    /// Called together with [`RelationshipCache::invalidate_all`] on every
    /// membership change; rebuilding waits for the next connection query.
    pub(crate) fn invalidate(&mut self) {
        self.connections.clear();
        self.valid = false;
    }

    /// Whether the list reflects the current collection.
    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        self.valid
    }

    /// Rebuilds the list if it is stale, then returns it.
    ///
    /// Pairs are enumerated in diagram insertion order (`(0,1), (0,2),
    /// (1,2), ...`), which keeps the output deterministic. Each pair is
    /// classified through the cache, so a rebuild after a pure visibility
    /// change costs no set computations.
    pub(crate) fn ensure_built(
        &mut self,
        diagrams: &IndexMap<Id, Diagram>,
        cache: &mut RelationshipCache,
    ) -> &[Connection] {
        if !self.valid {
            self.rebuild(diagrams, cache);
        }
        &self.connections
    }

    fn rebuild(&mut self, diagrams: &IndexMap<Id, Diagram>, cache: &mut RelationshipCache) {
        self.connections.clear();

        let ids: Vec<Id> = diagrams.keys().copied().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                let key = PairKey::new(a, b);
                let lo_labels = diagrams[&key.lo()].labels();
                let hi_labels = diagrams[&key.hi()].labels();

                let entry = cache.get(key, lo_labels, hi_labels);
                if let Some(connection) = classify(a, b, key, entry) {
                    self.connections.push(connection);
                }
            }
        }

        self.valid = true;
        debug!(
            diagram_count = ids.len(),
            candidate_count = self.connections.len();
            "Candidate connections rebuilt"
        );
    }
}
