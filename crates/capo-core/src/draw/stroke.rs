//! Stroke definitions for lines and outlined markers.
//!
//! Chord diagrams only need solid strokes; the distinguishing property is
//! width (the nut is drawn at 6 units, everything else at 2). Use the
//! [`apply_stroke!`](crate::apply_stroke!) macro to apply a stroke to an SVG
//! element.

/// A solid stroke with a color and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    color: String,
    width: f32,
}

impl Stroke {
    /// Creates a new solid stroke.
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns a copy of this stroke with a different width.
    pub fn with_width(&self, width: f32) -> Self {
        Self {
            color: self.color.clone(),
            width,
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: String::from("black"),
            width: 2.0,
        }
    }
}

/// Apply stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use capo_core::draw::Stroke;
/// use svg::node::element as svg_element;
///
/// let stroke = Stroke::new("black", 2.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 100)
///     .set("y2", 0);
///
/// let line = capo_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-width", $stroke.width())
    };
}
