//! Per-string markers for chord diagrams.
//!
//! These are stateless constructors returning boxed SVG nodes: the finger
//! dot, the open-string circle, the muted-string cross, and the barre bar.
//! Placement is the layout's job; markers only know their own shape.

use svg::node::element::{Circle, Line, Path, path::Data};

use crate::{apply_stroke, draw::Stroke, geometry::Point};

use super::SvgNode;

/// A filled dot marking a pressed fret.
pub fn finger_dot(center: Point, radius: f32, color: &str) -> SvgNode {
    Box::new(
        Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", color.to_string()),
    )
}

/// An unfilled circle above the boundary marking an open string.
pub fn open_marker(center: Point, radius: f32, stroke: &Stroke) -> SvgNode {
    let circle = Circle::new()
        .set("cx", center.x())
        .set("cy", center.y())
        .set("r", radius)
        .set("fill", "none");

    Box::new(apply_stroke!(circle, stroke))
}

/// An "×" above the boundary marking a muted string.
///
/// Drawn as one path with two crossing segments so it stays a single node.
pub fn mute_marker(center: Point, half: f32, stroke: &Stroke) -> SvgNode {
    let data = Data::new()
        .move_to((center.x() - half, center.y() - half))
        .line_to((center.x() + half, center.y() + half))
        .move_to((center.x() + half, center.y() - half))
        .line_to((center.x() - half, center.y() + half));

    let path = Path::new().set("d", data).set("fill", "none");

    Box::new(apply_stroke!(path, stroke))
}

/// A thick horizontal bar spanning several strings at one fret.
///
/// `from` and `to` are the outermost string positions at the barre's fret
/// row; the round line cap gives the bar its pill shape.
pub fn barre_bar(from: Point, to: Point, stroke: &Stroke) -> SvgNode {
    let line = Line::new()
        .set("x1", from.x())
        .set("y1", from.y())
        .set("x2", to.x())
        .set("y2", to.y())
        .set("stroke-linecap", "round");

    Box::new(apply_stroke!(line, stroke))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finger_dot_is_filled_circle() {
        let node = finger_dot(Point::new(76.0, 126.0), 12.0, "#1a1a1a");
        let rendered = node.to_string();
        assert!(rendered.contains("<circle"));
        assert!(rendered.contains("fill=\"#1a1a1a\""));
        assert!(rendered.contains("r=\"12\""));
    }

    #[test]
    fn test_open_marker_is_unfilled() {
        let node = open_marker(Point::new(40.0, 46.0), 5.0, &Stroke::default());
        let rendered = node.to_string();
        assert!(rendered.contains("fill=\"none\""));
        assert!(rendered.contains("stroke=\"black\""));
    }

    #[test]
    fn test_mute_marker_crosses_center() {
        let node = mute_marker(Point::new(40.0, 46.0), 5.0, &Stroke::default());
        let rendered = node.to_string();
        assert!(rendered.contains("<path"));
        // Both diagonals start at the left edge of the cross.
        assert!(rendered.contains("M35,41"));
        assert!(rendered.contains("M45,41"));
    }

    #[test]
    fn test_barre_bar_spans_endpoints() {
        let node = barre_bar(
            Point::new(40.0, 82.0),
            Point::new(220.0, 82.0),
            &Stroke::new("black", 12.0),
        );
        let rendered = node.to_string();
        assert!(rendered.contains("x1=\"40\""));
        assert!(rendered.contains("x2=\"220\""));
        assert!(rendered.contains("stroke-linecap=\"round\""));
    }
}
