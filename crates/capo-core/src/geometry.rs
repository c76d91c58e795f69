//! Geometric primitives for diagram layout and positioning.
//!
//! # Coordinate System
//!
//! Capo uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates. The coordinate system has origin at
/// top-left with Y increasing downward (see [module documentation](self)).
///
/// # Examples
///
/// ```
/// # use capo_core::geometry::Point;
/// let p = Point::new(40.0, 60.0);
/// assert_eq!(p.x(), 40.0);
/// assert_eq!(p.y(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point at the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns a new point offset by the given deltas.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the midpoint between this point and another.
    pub fn midpoint(&self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_translate() {
        let p = Point::new(10.0, 20.0).translate(5.0, -5.0);
        assert_approx_eq!(f32, p.x(), 15.0);
        assert_approx_eq!(f32, p.y(), 15.0);
    }

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(10.0, 30.0));
        assert_approx_eq!(f32, mid.x(), 5.0);
        assert_approx_eq!(f32, mid.y(), 15.0);
    }

    #[test]
    fn test_size_accessors() {
        let size = Size::new(260.0, 360.0);
        assert_approx_eq!(f32, size.width(), 260.0);
        assert_approx_eq!(f32, size.height(), 360.0);
    }
}
