//! Geometric primitives for diagram placement on the canvas.
//!
//! The engine never computes layout; it only stores each diagram's position
//! and size so that materialized connections can report their endpoints. The
//! coordinate system matches SVG: origin at the top-left, X increasing
//! rightward, Y increasing downward.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle defined by an origin point and a size

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use constellation_core::geometry::Point;
/// let p = Point::new(50.0, 50.0);
/// assert_eq!(p.x(), 50.0);
/// assert_eq!(p.y(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Width and height dimensions of a diagram on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f32 {
        self.height
    }
}

/// A rectangle on the canvas, defined by its top-left origin and its size.
///
/// Diagram bounds are owned by the rendering layer; the engine stores them as
/// opaque data and reads them back when reporting connection endpoints.
///
/// # Examples
///
/// ```
/// # use constellation_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new(Point::new(10.0, 20.0), Size::new(400.0, 300.0));
/// assert_eq!(bounds.max_x(), 410.0);
/// assert_eq!(bounds.center(), Point::new(210.0, 170.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    origin: Point,
    size: Size,
}

impl Bounds {
    /// Creates a new rectangle from an origin and a size
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns the top-left origin
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the size
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns the smallest x-coordinate covered by the rectangle
    pub fn min_x(self) -> f32 {
        self.origin.x
    }

    /// Returns the smallest y-coordinate covered by the rectangle
    pub fn min_y(self) -> f32 {
        self.origin.y
    }

    /// Returns the largest x-coordinate covered by the rectangle
    pub fn max_x(self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the largest y-coordinate covered by the rectangle
    pub fn max_y(self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the center point of the rectangle.
    ///
    /// Connection lines are drawn between diagram centers, so this is the
    /// coordinate the rendering layer typically consumes.
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use constellation_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
    /// let b = Bounds::new(Point::new(20.0, 5.0), Size::new(10.0, 10.0));
    ///
    /// let union = a.union(b);
    /// assert_eq!(union.origin(), Point::new(0.0, 0.0));
    /// assert_eq!(union.max_x(), 30.0);
    /// assert_eq!(union.max_y(), 15.0);
    /// ```
    pub fn union(self, other: Bounds) -> Bounds {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());

        Bounds::new(
            Point::new(min_x, min_y),
            Size::new(max_x - min_x, max_y - min_y),
        )
    }
}
