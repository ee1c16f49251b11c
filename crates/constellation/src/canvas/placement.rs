//! Row-wrapping placement of newly loaded diagrams.
//!
//! The engine does not lay diagrams out, but a freshly loaded diagram needs
//! somewhere to stand until the rendering layer repositions it. The cursor
//! hands out positions left to right, wraps to a new row when the next slot
//! would run past the configured row width, and advances rows by the height
//! of the tallest diagram seen in the current row.

use constellation_core::geometry::{Bounds, Point, Size};

use crate::config::PlacementConfig;

/// Hands out initial bounds for newly added diagrams.
#[derive(Debug)]
pub(crate) struct PlacementCursor {
    origin: Point,
    gap: f32,
    row_width: f32,
    /// Width estimate for the not-yet-known next diagram, used by the wrap
    /// check.
    wrap_estimate: f32,
    next: Point,
    row_start_y: f32,
    row_max_height: f32,
}

impl PlacementCursor {
    pub(crate) fn new(config: &PlacementConfig) -> Self {
        let origin = config.origin();
        Self {
            origin,
            gap: config.gap(),
            row_width: config.row_width(),
            wrap_estimate: config.default_size().width(),
            next: origin,
            row_start_y: origin.y(),
            row_max_height: 0.0,
        }
    }

    /// Returns bounds at the current slot and advances the cursor.
    pub(crate) fn place(&mut self, size: Size) -> Bounds {
        let bounds = Bounds::new(self.next, size);
        self.advance(size);
        bounds
    }

    fn advance(&mut self, placed: Size) {
        self.row_max_height = self.row_max_height.max(placed.height());
        self.next = Point::new(self.next.x() + placed.width() + self.gap, self.next.y());

        if self.next.x() + self.wrap_estimate > self.row_width {
            self.row_start_y += self.row_max_height + self.gap;
            self.next = Point::new(self.origin.x(), self.row_start_y);
            self.row_max_height = placed.height();
        }
    }

    /// Moves the cursor back to the origin, as after clearing the canvas.
    pub(crate) fn reset(&mut self) {
        self.next = self.origin;
        self.row_start_y = self.origin.y();
        self.row_max_height = 0.0;
    }
}
