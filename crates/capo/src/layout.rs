//! Fixed-canvas fretboard layout.
//!
//! All geometry for a chord diagram is a pure function of `fret_start` and
//! `frets_visible` on a fixed 260×360 canvas:
//!
//! ```text
//!          40            220
//!           │  Cmaj       │
//!    60 ────┼━━━━━━━━━━━━━┤  ← boundary (nut when fret_start == 1)
//!           │  │  │  │  │ │
//!           ├──┼──┼──┼──┼─┤  ← fret lines, one per visible row
//!           │  │  │  │  │ │
//!   280 ────┴──┴──┴──┴──┴─┘
//! ```
//!
//! Six strings over a 180-unit grid width gives five 36-unit gaps; the
//! 220-unit grid height is divided evenly among the visible fret rows.

use capo_core::geometry::{Point, Size};

/// Total canvas width.
pub const CANVAS_WIDTH: f32 = 260.0;
/// Total canvas height.
pub const CANVAS_HEIGHT: f32 = 360.0;
/// X of the leftmost string.
pub const LEFT_MARGIN: f32 = 40.0;
/// Y of the top boundary line.
pub const TOP_MARGIN: f32 = 60.0;
/// Width of the string grid.
pub const GRID_WIDTH: f32 = 180.0;
/// Height of the fret grid.
pub const GRID_HEIGHT: f32 = 220.0;

/// Horizontal distance between adjacent strings (6 strings, 5 gaps).
const STRING_SPACING: f32 = GRID_WIDTH / 5.0;

/// Geometry of one diagram's visible fret window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretboardLayout {
    fret_start: u32,
    frets_visible: u32,
    row_height: f32,
}

impl FretboardLayout {
    /// Creates the layout for a visible window starting at `fret_start` and
    /// spanning `frets_visible` rows. Both are coerced to at least 1.
    pub fn new(fret_start: u32, frets_visible: u32) -> Self {
        let fret_start = fret_start.max(1);
        let frets_visible = frets_visible.max(1);
        Self {
            fret_start,
            frets_visible,
            row_height: GRID_HEIGHT / frets_visible as f32,
        }
    }

    /// Returns the canvas size.
    pub fn canvas(&self) -> Size {
        Size::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Returns the fret number at the top of the window.
    pub fn fret_start(&self) -> u32 {
        self.fret_start
    }

    /// Returns the number of visible fret rows.
    pub fn frets_visible(&self) -> u32 {
        self.frets_visible
    }

    /// Returns true when the window is anchored at the nut.
    pub fn at_nut(&self) -> bool {
        self.fret_start == 1
    }

    /// X coordinate of the string at the given layout index (0 = lowest
    /// pitch, leftmost).
    pub fn string_x(&self, index: usize) -> f32 {
        LEFT_MARGIN + index as f32 * STRING_SPACING
    }

    /// Y coordinate of the top boundary line.
    pub fn top_y(&self) -> f32 {
        TOP_MARGIN
    }

    /// Y coordinate of the bottom of the grid.
    pub fn bottom_y(&self) -> f32 {
        TOP_MARGIN + GRID_HEIGHT
    }

    /// Y coordinate of the `row`-th fret line inside the window (1-indexed).
    pub fn fret_line_y(&self, row: u32) -> f32 {
        TOP_MARGIN + row as f32 * self.row_height
    }

    /// True when the given absolute fret number falls inside the window.
    pub fn is_visible(&self, fret: u32) -> bool {
        fret >= self.fret_start && fret < self.fret_start + self.frets_visible
    }

    /// Center of a finger marker on the string at `index` pressed at the
    /// absolute fret `fret`. Only meaningful when [`is_visible`](Self::is_visible)
    /// holds for `fret`.
    pub fn finger_center(&self, index: usize, fret: u32) -> Point {
        let row_offset = fret as f32 - self.fret_start as f32 + 0.5;
        Point::new(self.string_x(index), TOP_MARGIN + row_offset * self.row_height)
    }

    /// Center of an open/mute marker above the boundary for the string at
    /// `index`.
    pub fn marker_center(&self, index: usize) -> Point {
        Point::new(self.string_x(index), TOP_MARGIN - 14.0)
    }

    /// Anchor of the title text, centered over the grid.
    pub fn title_anchor(&self) -> Point {
        Point::new(LEFT_MARGIN + GRID_WIDTH / 2.0, 32.0)
    }

    /// Anchor of the starting-fret label, left of the first fret row.
    pub fn fret_label_anchor(&self) -> Point {
        Point::new(LEFT_MARGIN - 10.0, TOP_MARGIN + 0.5 * self.row_height + 4.0)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_string_positions_span_grid() {
        let layout = FretboardLayout::new(1, 5);
        assert_approx_eq!(f32, layout.string_x(0), 40.0);
        assert_approx_eq!(f32, layout.string_x(1), 76.0);
        assert_approx_eq!(f32, layout.string_x(5), 220.0);
    }

    #[test]
    fn test_fret_rows_divide_grid_evenly() {
        let layout = FretboardLayout::new(1, 5);
        assert_approx_eq!(f32, layout.fret_line_y(1), 104.0);
        assert_approx_eq!(f32, layout.fret_line_y(5), 280.0);
        assert_approx_eq!(f32, layout.fret_line_y(5), layout.bottom_y());

        let tall = FretboardLayout::new(1, 4);
        assert_approx_eq!(f32, tall.fret_line_y(1), 115.0);
        assert_approx_eq!(f32, tall.fret_line_y(4), tall.bottom_y());
    }

    #[test]
    fn test_finger_center_is_mid_row() {
        let layout = FretboardLayout::new(1, 5);
        // Fret 1 dot sits halfway into the first 44-unit row.
        let dot = layout.finger_center(0, 1);
        assert_approx_eq!(f32, dot.y(), 82.0);

        // A shifted window keeps the same geometry relative to fret_start.
        let shifted = FretboardLayout::new(8, 5);
        let dot = shifted.finger_center(0, 8);
        assert_approx_eq!(f32, dot.y(), 82.0);
    }

    #[test]
    fn test_visibility_window() {
        let layout = FretboardLayout::new(1, 5);
        assert!(layout.is_visible(1));
        assert!(layout.is_visible(5));
        assert!(!layout.is_visible(6));
        assert!(!layout.is_visible(10));

        let shifted = FretboardLayout::new(8, 5);
        assert!(!shifted.is_visible(7));
        assert!(shifted.is_visible(10));
        assert!(shifted.is_visible(12));
        assert!(!shifted.is_visible(13));
    }

    #[test]
    fn test_zero_inputs_are_coerced() {
        let layout = FretboardLayout::new(0, 0);
        assert_eq!(layout.fret_start(), 1);
        assert_eq!(layout.frets_visible(), 1);
        assert!(layout.at_nut());
    }
}
