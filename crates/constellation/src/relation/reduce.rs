//! One-level transitive reduction over subset connections.
//!
//! A subset edge that is reproduced by a two-hop path through a single
//! intermediate diagram adds no information to the picture, so the
//! materializer can drop it on request. The check is one level deep by
//! construction: every edge is tested against the unmodified input set, and
//! chains of three or more hops only collapse fully when each consecutive
//! sub-edge is itself present as a direct edge. No closure is computed, and
//! cyclic edge sets terminate like any other input.

use std::collections::{HashMap, HashSet};

use constellation_core::identifier::Id;

use crate::relation::Connection;

/// Drops subset edges witnessed by a two-hop subset path.
///
/// `Shared` connections pass through untouched and input order is preserved.
/// An edge `from → to` is removed iff the input also contains `from → mid`
/// and `mid → to` for some third diagram `mid`.
pub(crate) fn reduce_transitive(connections: Vec<Connection>) -> Vec<Connection> {
    let mut subset_edges: HashSet<(Id, Id)> = HashSet::new();
    let mut outgoing: HashMap<Id, Vec<Id>> = HashMap::new();
    for connection in &connections {
        if let Connection::Subset { from, to } = *connection {
            subset_edges.insert((from, to));
            outgoing.entry(from).or_default().push(to);
        }
    }

    connections
        .into_iter()
        .filter(|connection| match *connection {
            Connection::Shared { .. } => true,
            Connection::Subset { from, to } => {
                let witnessed = outgoing
                    .get(&from)
                    .map(|mids| {
                        mids.iter()
                            .any(|&mid| mid != to && subset_edges.contains(&(mid, to)))
                    })
                    .unwrap_or(false);
                !witnessed
            }
        })
        .collect()
}
