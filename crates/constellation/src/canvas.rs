//! The canvas: diagram collection, visibility, and the connection engine.
//!
//! A [`Canvas`] owns everything the relationship engine needs: the diagram
//! collection in insertion order, each diagram's visibility flag and bounds,
//! the memoized relationship cache, the lazily rebuilt candidate list, the
//! materializer settings, and the auto-density guard. Every operation runs
//! to completion synchronously inside its method call; there is no
//! background work and nothing here blocks on I/O.
//!
//! Membership mutations (add, remove, clear) invalidate the relationship
//! cache and the candidate list. Visibility toggles, setting changes, and
//! geometry updates do not — label sets are unchanged then, and the next
//! [`Canvas::connections`] call re-filters the cached candidates.

mod density;
mod placement;

use indexmap::IndexMap;
use log::{debug, info, warn};

use constellation_core::{geometry::Bounds, identifier::Id, label::LabelSet};

use crate::config::AppConfig;
use crate::error::ConstellationError;
use crate::relation::{
    cache::RelationshipCache,
    pairs::CandidateList,
    visible::{ConnectionLine, ConnectionMode, ViewState, materialize},
};

use self::density::DensityGuard;
use self::placement::PlacementCursor;

/// A diagram loaded onto the canvas.
///
/// The label set is computed once at load time and never mutated afterwards;
/// relationship results for this id stay valid for the diagram's whole
/// lifetime. Bounds are owned by the rendering layer and only stored here.
#[derive(Debug, Clone)]
pub struct Diagram {
    id: Id,
    labels: LabelSet,
    visible: bool,
    bounds: Bounds,
}

impl Diagram {
    pub(crate) fn new(id: Id, labels: LabelSet, bounds: Bounds) -> Self {
        Self {
            id,
            labels,
            visible: true,
            bounds,
        }
    }

    /// The diagram's identity.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The labels the diagram declares.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Whether the diagram is currently shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The diagram's current bounds on the canvas.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }
}

/// Result of loading a diagram source by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The diagram was added to the canvas.
    Loaded(Id),
    /// A diagram with this name is already loaded; nothing changed.
    Duplicate(Id),
}

impl LoadOutcome {
    /// The id the outcome refers to.
    pub fn id(&self) -> Id {
        match *self {
            LoadOutcome::Loaded(id) | LoadOutcome::Duplicate(id) => id,
        }
    }
}

/// The multi-diagram canvas and its connection engine.
///
/// # Examples
///
/// ```
/// use constellation::{Canvas, config::AppConfig};
///
/// let mut canvas = Canvas::new(AppConfig::default());
/// canvas
///     .load_source("orders", r#"digraph { a [label="orders"]; b [label="billing"]; }"#)
///     .expect("diagram loads");
/// canvas
///     .load_source("billing", r#"digraph { x [label="billing"]; }"#)
///     .expect("diagram loads");
///
/// let connections = canvas.connections();
/// assert_eq!(connections.len(), 1);
/// ```
#[derive(Debug)]
pub struct Canvas {
    diagrams: IndexMap<Id, Diagram>,
    cache: RelationshipCache,
    candidates: CandidateList,
    view: ViewState,
    density: DensityGuard,
    cursor: PlacementCursor,
    config: AppConfig,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Canvas {
    /// Creates an empty canvas with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let view = ViewState {
            mode: config.view().mode(),
            min_shared_labels: config.view().min_shared_labels(),
            hide_transitive: config.view().hide_transitive(),
        };

        Self {
            diagrams: IndexMap::new(),
            cache: RelationshipCache::default(),
            candidates: CandidateList::default(),
            view,
            density: DensityGuard::default(),
            cursor: PlacementCursor::new(config.placement()),
            config,
        }
    }

    // ---------------------------------------------------------------------
    // Loading and membership
    // ---------------------------------------------------------------------

    /// Loads a diagram from DOT source under the given name.
    ///
    /// The name becomes the diagram's id. A name that is already loaded is
    /// skipped and reported as [`LoadOutcome::Duplicate`]. Malformed DOT is
    /// not fatal: the diagram is loaded with an empty label set and
    /// participates in zero relationships.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice; the `Result` leaves room for the
    /// same failure surface as [`Canvas::add_diagram`].
    pub fn load_source(
        &mut self,
        name: &str,
        source: &str,
    ) -> Result<LoadOutcome, ConstellationError> {
        let id = Id::new(name);
        if self.diagrams.contains_key(&id) {
            info!(diagram:% = id; "Skipping duplicate diagram");
            return Ok(LoadOutcome::Duplicate(id));
        }

        let labels = match constellation_parser::extract_labels(source) {
            Ok(labels) => labels,
            Err(err) => {
                warn!(
                    diagram:% = id,
                    error:% = err;
                    "Label extraction failed; diagram joins with an empty label set"
                );
                LabelSet::new()
            }
        };

        self.add_diagram(id, labels)?;
        Ok(LoadOutcome::Loaded(id))
    }

    /// Adds a diagram with an already-extracted label set.
    ///
    /// Initial bounds come from the placement cursor; the diagram starts
    /// visible. Invalidates the relationship cache and the candidate list.
    ///
    /// # Errors
    ///
    /// Returns [`ConstellationError::DuplicateDiagram`] if the id is already
    /// on the canvas.
    pub fn add_diagram(&mut self, id: Id, labels: LabelSet) -> Result<(), ConstellationError> {
        if self.diagrams.contains_key(&id) {
            return Err(ConstellationError::DuplicateDiagram(id));
        }

        let bounds = self.cursor.place(self.config.placement().default_size());
        self.diagrams.insert(id, Diagram::new(id, labels, bounds));
        self.invalidate();
        self.density
            .on_count_changed(self.diagrams.len(), &mut self.view.mode);

        info!(diagram:% = id, total = self.diagrams.len(); "Diagram added");
        Ok(())
    }

    /// Removes a diagram. Invalidates the relationship cache and the
    /// candidate list.
    ///
    /// # Errors
    ///
    /// Returns [`ConstellationError::UnknownDiagram`] if the id is not on
    /// the canvas.
    pub fn remove_diagram(&mut self, id: Id) -> Result<(), ConstellationError> {
        if self.diagrams.shift_remove(&id).is_none() {
            return Err(ConstellationError::UnknownDiagram(id));
        }

        self.invalidate();
        self.density
            .on_count_changed(self.diagrams.len(), &mut self.view.mode);

        info!(diagram:% = id, total = self.diagrams.len(); "Diagram removed");
        Ok(())
    }

    /// Removes every diagram and resets the placement cursor.
    pub fn clear(&mut self) {
        self.diagrams.clear();
        self.invalidate();
        self.cursor.reset();
        self.density.on_count_changed(0, &mut self.view.mode);

        info!("Canvas cleared");
    }

    fn invalidate(&mut self) {
        self.cache.invalidate_all();
        self.candidates.invalidate();
    }

    // ---------------------------------------------------------------------
    // Visibility
    // ---------------------------------------------------------------------

    /// Shows or hides one diagram. The relationship cache survives.
    ///
    /// # Errors
    ///
    /// Returns [`ConstellationError::UnknownDiagram`] if the id is not on
    /// the canvas.
    pub fn set_visible(&mut self, id: Id, visible: bool) -> Result<(), ConstellationError> {
        let diagram = self
            .diagrams
            .get_mut(&id)
            .ok_or(ConstellationError::UnknownDiagram(id))?;
        diagram.set_visible(visible);

        debug!(diagram:% = id, visible; "Visibility changed");
        Ok(())
    }

    /// Replaces the visible set: listed diagrams become visible, all others
    /// hidden. Fails before changing anything if any id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ConstellationError::UnknownDiagram`] for the first id not
    /// on the canvas.
    pub fn set_all_visible(&mut self, ids: &[Id]) -> Result<(), ConstellationError> {
        if let Some(&missing) = ids.iter().find(|id| !self.diagrams.contains_key(*id)) {
            return Err(ConstellationError::UnknownDiagram(missing));
        }

        let listed: std::collections::HashSet<Id> = ids.iter().copied().collect();
        for (id, diagram) in self.diagrams.iter_mut() {
            diagram.set_visible(listed.contains(id));
        }

        debug!(visible_count = listed.len(); "Visible set replaced");
        Ok(())
    }

    /// Hides every diagram.
    pub fn clear_visible(&mut self) {
        for diagram in self.diagrams.values_mut() {
            diagram.set_visible(false);
        }
    }

    // ---------------------------------------------------------------------
    // Settings
    // ---------------------------------------------------------------------

    /// Sets the connection mode as an explicit user choice.
    ///
    /// This clears the auto-density flag: the chosen mode is pinned until
    /// the density guard triggers again.
    pub fn set_connection_mode(&mut self, mode: ConnectionMode) {
        self.view.mode = mode;
        self.density.on_manual_change();

        debug!(mode:% = mode; "Connection mode changed");
    }

    /// Sets the minimum shared-label threshold. Shared connections must
    /// share strictly more labels than this to be rendered.
    pub fn set_min_shared_labels(&mut self, min_shared_labels: usize) {
        self.view.min_shared_labels = min_shared_labels;
    }

    /// Shows or hides subset edges implied by a two-hop path.
    pub fn set_hide_transitive(&mut self, hide_transitive: bool) {
        self.view.hide_transitive = hide_transitive;
    }

    /// The current connection mode.
    pub fn connection_mode(&self) -> ConnectionMode {
        self.view.mode
    }

    /// The current minimum shared-label threshold.
    pub fn min_shared_labels(&self) -> usize {
        self.view.min_shared_labels
    }

    /// Whether transitive subset edges are hidden.
    pub fn hide_transitive(&self) -> bool {
        self.view.hide_transitive
    }

    /// Whether the current mode was forced by the density guard.
    pub fn is_auto_suppressed(&self) -> bool {
        self.density.is_auto_suppressed()
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    /// Stores new bounds reported by the rendering layer.
    ///
    /// Geometry changes never touch relationship state; the next
    /// [`Canvas::connections`] call re-reads the stored bounds for the
    /// already-known connection set.
    ///
    /// # Errors
    ///
    /// Returns [`ConstellationError::UnknownDiagram`] if the id is not on
    /// the canvas.
    pub fn move_diagram(&mut self, id: Id, bounds: Bounds) -> Result<(), ConstellationError> {
        let diagram = self
            .diagrams
            .get_mut(&id)
            .ok_or(ConstellationError::UnknownDiagram(id))?;
        diagram.set_bounds(bounds);
        Ok(())
    }

    /// The union of all diagram bounds, or `None` for an empty canvas.
    pub fn bounding_box(&self) -> Option<Bounds> {
        self.diagrams
            .values()
            .map(Diagram::bounds)
            .reduce(Bounds::union)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Number of diagrams on the canvas.
    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    /// Whether the canvas is empty.
    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }

    /// Checks whether a diagram with the given id is loaded.
    pub fn contains(&self, id: Id) -> bool {
        self.diagrams.contains_key(&id)
    }

    /// Returns a diagram by id.
    pub fn diagram(&self, id: Id) -> Option<&Diagram> {
        self.diagrams.get(&id)
    }

    /// Returns all diagrams in insertion order.
    pub fn diagrams(&self) -> impl Iterator<Item = &Diagram> {
        self.diagrams.values()
    }

    /// Materializes the current connection list.
    ///
    /// Rebuilds the candidate list first if a membership change invalidated
    /// it, then filters by visibility, mode, transitive reduction, and the
    /// shared-label threshold. The result is complete and ordered; consumers
    /// treat it as replace-in-full.
    pub fn connections(&mut self) -> Vec<ConnectionLine> {
        let candidates = self.candidates.ensure_built(&self.diagrams, &mut self.cache);
        materialize(candidates, &self.diagrams, self.view)
    }
}
