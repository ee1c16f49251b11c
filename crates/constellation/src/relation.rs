//! Relationship classification between diagram pairs.
//!
//! A relationship is defined purely by set membership over label strings:
//! two diagrams are connected when their label sets overlap, and the
//! connection is directed when one set contains the other. This module owns
//! the [`Connection`] value and the classification rule; the submodules own
//! caching ([`cache`]), candidate enumeration ([`pairs`]), transitive
//! reduction ([`reduce`]), and visibility materialization ([`visible`]).

pub(crate) mod cache;
pub(crate) mod pairs;
pub(crate) mod reduce;
pub(crate) mod visible;

use constellation_core::identifier::Id;

use self::cache::{PairKey, RelationshipEntry};

/// A classified connection between two diagrams.
///
/// Derived and ephemeral: connections are recomputed from the relationship
/// cache on demand and never persisted. A disjoint pair produces no value at
/// all, so every `Connection` represents an actual overlap. Exactly one
/// variant exists per pair; equal label sets classify as [`Connection::Shared`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Connection {
    /// Partial overlap: the two label sets intersect without either
    /// containing the other (or they are equal). Symmetric.
    Shared {
        /// One endpoint.
        a: Id,
        /// The other endpoint.
        b: Id,
        /// Number of labels the two diagrams share; at least 1.
        shared_count: usize,
    },
    /// Containment: `to`'s labels are all present in `from`'s.
    ///
    /// The arrow points from the superset diagram to the subset diagram —
    /// "`from` contains everything `to` has".
    Subset {
        /// The superset diagram.
        from: Id,
        /// The subset diagram.
        to: Id,
    },
}

impl Connection {
    /// The two diagram ids this connection touches, in variant order.
    pub(crate) fn endpoints(&self) -> (Id, Id) {
        match *self {
            Connection::Shared { a, b, .. } => (a, b),
            Connection::Subset { from, to } => (from, to),
        }
    }
}

/// Classifies the relationship between diagrams `a` and `b`.
///
/// `entry` is the cached relationship for the pair and `key` its canonical
/// key; the output is oriented for the query order `(a, b)`.
///
/// Rules, in order:
/// - no shared labels: no connection;
/// - exactly one side is a subset of the other: [`Connection::Subset`] with
///   the superset as `from`;
/// - otherwise (partial overlap, or equal non-empty sets where both subset
///   flags hold): [`Connection::Shared`]. Equal sets tie-break to `Shared`
///   because a containment arrow is only informative when strict.
pub(crate) fn classify(
    a: Id,
    b: Id,
    key: PairKey,
    entry: &RelationshipEntry,
) -> Option<Connection> {
    if entry.shared_count() == 0 {
        return None;
    }

    let (a_subset_of_b, b_subset_of_a) = entry.oriented_flags(key, a);
    let connection = match (a_subset_of_b, b_subset_of_a) {
        (true, false) => Connection::Subset { from: b, to: a },
        (false, true) => Connection::Subset { from: a, to: b },
        _ => Connection::Shared {
            a,
            b,
            shared_count: entry.shared_count(),
        },
    };
    Some(connection)
}
