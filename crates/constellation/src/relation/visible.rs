//! Visibility-aware materialization of the final connection list.
//!
//! The candidate list covers the full collection; this module filters it down
//! to the diagrams currently visible, applies the user's connection mode and
//! minimum-shared-label threshold, optionally runs the transitive reduction,
//! and attaches endpoint geometry so the rendering layer can draw without
//! querying the engine again. The output is rebuilt completely on every
//! query; consumers treat it as replace-in-full.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use log::trace;
use serde::Deserialize;

use constellation_core::{geometry::Bounds, identifier::Id};

use crate::canvas::Diagram;
use crate::relation::{Connection, reduce::reduce_transitive};

/// Which connections are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionMode {
    /// Shared and subset connections.
    #[default]
    All,
    /// Subset connections only.
    SubsetOnly,
    /// No connections.
    None,
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionMode::All => "all",
            ConnectionMode::SubsetOnly => "subset-only",
            ConnectionMode::None => "none",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ConnectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ConnectionMode::All),
            "subset-only" => Ok(ConnectionMode::SubsetOnly),
            "none" => Ok(ConnectionMode::None),
            other => Err(format!(
                "Unknown connection mode '{other}' (expected all, subset-only, or none)"
            )),
        }
    }
}

/// The materializer's runtime settings.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ViewState {
    /// Connection visibility mode.
    pub(crate) mode: ConnectionMode,
    /// Shared connections must share strictly more labels than this.
    pub(crate) min_shared_labels: usize,
    /// Whether to drop subset edges implied by a two-hop path.
    pub(crate) hide_transitive: bool,
}

/// One endpoint of a materialized connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    /// The diagram's identity.
    pub id: Id,
    /// The diagram's bounds at materialization time.
    pub bounds: Bounds,
}

/// A connection ready to draw.
///
/// Carries everything the rendering layer needs — endpoint ids, their
/// current geometry, the connection type, and the shared count for the edge
/// annotation. Emitted as a complete list on every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectionLine {
    /// Partial label overlap; undirected.
    Shared {
        /// One endpoint.
        a: Endpoint,
        /// The other endpoint.
        b: Endpoint,
        /// Number of labels the two diagrams share.
        shared_count: usize,
    },
    /// Containment; drawn as an arrow from the superset diagram.
    Subset {
        /// The superset diagram.
        from: Endpoint,
        /// The subset diagram.
        to: Endpoint,
    },
}

/// Filters the candidate list down to the final ordered connection list.
///
/// Steps, in order:
/// 1. mode `none` short-circuits to an empty list;
/// 2. connections with a hidden endpoint are dropped (both endpoints must be
///    visible);
/// 3. mode `subset-only` drops shared connections;
/// 4. `hide_transitive` runs the transitive reduction on what remains;
/// 5. a positive threshold drops shared connections whose count does not
///    exceed it. Subset connections are structurally significant regardless
///    of count and never threshold-filtered.
///
/// Candidate order is preserved, so unchanged inputs produce an identical
/// list.
pub(crate) fn materialize(
    candidates: &[Connection],
    diagrams: &IndexMap<Id, Diagram>,
    view: ViewState,
) -> Vec<ConnectionLine> {
    if view.mode == ConnectionMode::None {
        return Vec::new();
    }

    let is_visible = |id: Id| diagrams.get(&id).is_some_and(Diagram::visible);

    let mut connections: Vec<Connection> = candidates
        .iter()
        .copied()
        .filter(|connection| {
            let (a, b) = connection.endpoints();
            is_visible(a) && is_visible(b)
        })
        .filter(|connection| {
            view.mode != ConnectionMode::SubsetOnly
                || matches!(connection, Connection::Subset { .. })
        })
        .collect();

    if view.hide_transitive {
        connections = reduce_transitive(connections);
    }

    if view.min_shared_labels > 0 {
        connections.retain(|connection| match *connection {
            Connection::Shared { shared_count, .. } => shared_count > view.min_shared_labels,
            Connection::Subset { .. } => true,
        });
    }

    let lines: Vec<ConnectionLine> = connections
        .into_iter()
        .map(|connection| to_line(connection, diagrams))
        .collect();

    trace!(line_count = lines.len(); "Connections materialized");
    lines
}

fn to_line(connection: Connection, diagrams: &IndexMap<Id, Diagram>) -> ConnectionLine {
    let endpoint = |id: Id| Endpoint {
        id,
        bounds: diagrams[&id].bounds(),
    };

    match connection {
        Connection::Shared { a, b, shared_count } => ConnectionLine::Shared {
            a: endpoint(a),
            b: endpoint(b),
            shared_count,
        },
        Connection::Subset { from, to } => ConnectionLine::Subset {
            from: endpoint(from),
            to: endpoint(to),
        },
    }
}

#[cfg(test)]
mod tests {
    use constellation_core::{
        geometry::{Point, Size},
        label::LabelSet,
    };

    use super::*;

    fn diagram(name: &str, labels: &[&str], visible: bool) -> (Id, Diagram) {
        let id = Id::new(name);
        let labels: LabelSet = labels.iter().copied().collect();
        let mut diagram = Diagram::new(
            id,
            labels,
            Bounds::new(Point::new(10.0, 10.0), Size::new(400.0, 300.0)),
        );
        diagram.set_visible(visible);
        (id, diagram)
    }

    fn shared(a: &str, b: &str, shared_count: usize) -> Connection {
        Connection::Shared {
            a: Id::new(a),
            b: Id::new(b),
            shared_count,
        }
    }

    fn subset(from: &str, to: &str) -> Connection {
        Connection::Subset {
            from: Id::new(from),
            to: Id::new(to),
        }
    }

    fn line_endpoints(line: &ConnectionLine) -> (Id, Id) {
        match line {
            ConnectionLine::Shared { a, b, .. } => (a.id, b.id),
            ConnectionLine::Subset { from, to } => (from.id, to.id),
        }
    }

    #[test]
    fn test_mode_none_short_circuits() {
        let diagrams: IndexMap<Id, Diagram> = [
            diagram("vis_a", &["x"], true),
            diagram("vis_b", &["x"], true),
        ]
        .into_iter()
        .collect();
        let candidates = vec![shared("vis_a", "vis_b", 1)];

        let view = ViewState {
            mode: ConnectionMode::None,
            ..ViewState::default()
        };
        assert!(materialize(&candidates, &diagrams, view).is_empty());
    }

    #[test]
    fn test_hidden_endpoint_drops_connection() {
        let diagrams: IndexMap<Id, Diagram> = [
            diagram("vis_c", &["x", "y"], true),
            diagram("vis_d", &["x", "y", "z"], true),
            diagram("vis_e", &["z"], false),
        ]
        .into_iter()
        .collect();
        let candidates = vec![
            subset("vis_d", "vis_c"),
            subset("vis_d", "vis_e"),
            shared("vis_c", "vis_e", 1),
        ];

        let lines = materialize(&candidates, &diagrams, ViewState::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(
            line_endpoints(&lines[0]),
            (Id::new("vis_d"), Id::new("vis_c"))
        );
    }

    #[test]
    fn test_subset_only_mode() {
        let diagrams: IndexMap<Id, Diagram> = [
            diagram("vis_f", &["x", "y"], true),
            diagram("vis_g", &["x", "y", "z"], true),
            diagram("vis_h", &["z", "w"], true),
        ]
        .into_iter()
        .collect();
        let candidates = vec![subset("vis_g", "vis_f"), shared("vis_g", "vis_h", 1)];

        let view = ViewState {
            mode: ConnectionMode::SubsetOnly,
            ..ViewState::default()
        };
        let lines = materialize(&candidates, &diagrams, view);

        assert_eq!(lines.len(), 1);
        assert!(matches!(lines[0], ConnectionLine::Subset { .. }));
    }

    #[test]
    fn test_threshold_drops_weak_shared_only() {
        let diagrams: IndexMap<Id, Diagram> = [
            diagram("vis_i", &["x"], true),
            diagram("vis_j", &["x", "q"], true),
            diagram("vis_k", &["q", "r"], true),
        ]
        .into_iter()
        .collect();
        // Subset with a single shared label, Shared with one and with two.
        let candidates = vec![
            subset("vis_j", "vis_i"),
            shared("vis_j", "vis_k", 1),
            shared("vis_i", "vis_k", 2),
        ];

        let view = ViewState {
            min_shared_labels: 1,
            ..ViewState::default()
        };
        let lines = materialize(&candidates, &diagrams, view);

        // Count must exceed the threshold; subsets are never dropped.
        assert_eq!(lines.len(), 2);
        assert!(matches!(lines[0], ConnectionLine::Subset { .. }));
        assert!(matches!(
            lines[1],
            ConnectionLine::Shared {
                shared_count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_transitive_reduction_applies_after_visibility() {
        let diagrams: IndexMap<Id, Diagram> = [
            diagram("vis_l", &["x"], true),
            diagram("vis_m", &["x", "y"], true),
            diagram("vis_n", &["x", "y", "z"], true),
        ]
        .into_iter()
        .collect();
        let candidates = vec![
            subset("vis_n", "vis_m"),
            subset("vis_m", "vis_l"),
            subset("vis_n", "vis_l"),
        ];

        let view = ViewState {
            hide_transitive: true,
            ..ViewState::default()
        };
        let lines = materialize(&candidates, &diagrams, view);

        assert_eq!(lines.len(), 2);
        assert_eq!(
            line_endpoints(&lines[0]),
            (Id::new("vis_n"), Id::new("vis_m"))
        );
        assert_eq!(
            line_endpoints(&lines[1]),
            (Id::new("vis_m"), Id::new("vis_l"))
        );
    }

    #[test]
    fn test_hiding_witness_preserves_direct_edge() {
        // With the middle diagram hidden, the two-hop witness is gone and
        // the direct edge survives the reduction.
        let diagrams: IndexMap<Id, Diagram> = [
            diagram("vis_o", &["x"], true),
            diagram("vis_p", &["x", "y"], false),
            diagram("vis_q", &["x", "y", "z"], true),
        ]
        .into_iter()
        .collect();
        let candidates = vec![
            subset("vis_q", "vis_p"),
            subset("vis_p", "vis_o"),
            subset("vis_q", "vis_o"),
        ];

        let view = ViewState {
            hide_transitive: true,
            ..ViewState::default()
        };
        let lines = materialize(&candidates, &diagrams, view);

        assert_eq!(lines.len(), 1);
        assert_eq!(
            line_endpoints(&lines[0]),
            (Id::new("vis_q"), Id::new("vis_o"))
        );
    }

    #[test]
    fn test_geometry_is_attached() {
        let diagrams: IndexMap<Id, Diagram> = [
            diagram("vis_r", &["x"], true),
            diagram("vis_s", &["x"], true),
        ]
        .into_iter()
        .collect();
        let candidates = vec![shared("vis_r", "vis_s", 1)];

        let lines = materialize(&candidates, &diagrams, ViewState::default());
        match &lines[0] {
            ConnectionLine::Shared { a, b, .. } => {
                assert_eq!(a.bounds, diagrams[&a.id].bounds());
                assert_eq!(b.bounds, diagrams[&b.id].bounds());
            }
            other => panic!("expected shared line, got {other:?}"),
        }
    }

    #[test]
    fn test_idempotent_for_unchanged_inputs() {
        let diagrams: IndexMap<Id, Diagram> = [
            diagram("vis_t", &["x", "y"], true),
            diagram("vis_u", &["x", "y", "z"], true),
            diagram("vis_v", &["z", "w"], true),
        ]
        .into_iter()
        .collect();
        let candidates = vec![subset("vis_u", "vis_t"), shared("vis_u", "vis_v", 1)];
        let view = ViewState::default();

        let first = materialize(&candidates, &diagrams, view);
        let second = materialize(&candidates, &diagrams, view);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("all".parse(), Ok(ConnectionMode::All));
        assert_eq!("subset-only".parse(), Ok(ConnectionMode::SubsetOnly));
        assert_eq!("none".parse(), Ok(ConnectionMode::None));
        assert!("everything".parse::<ConnectionMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [
            ConnectionMode::All,
            ConnectionMode::SubsetOnly,
            ConnectionMode::None,
        ] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }
}
