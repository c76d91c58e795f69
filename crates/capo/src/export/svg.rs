//! SVG rendering for chord diagrams.
//!
//! Composes the SVG document from the diagram model and the fixed-canvas
//! layout. Every primitive goes through [`LayeredOutput`] so the z-order is
//! fixed by layer declaration, and within a layer by string order; given the
//! same diagram the output bytes are always identical.

use log::trace;
use svg::node::element as svg_element;

use capo_core::{
    apply_stroke,
    diagram::{ChordDiagram, StringState, STRING_COUNT, string_index},
    draw::{LayeredOutput, RenderLayer, Stroke, marker},
    geometry::Point,
};

use crate::{config::StyleConfig, layout::FretboardLayout};

/// Stroke width of the nut (the boundary at fret 1).
const NUT_WIDTH: f32 = 6.0;
/// Stroke width of fret lines, strings, and a non-nut boundary.
const LINE_WIDTH: f32 = 2.0;
/// Radius of a finger dot.
const FINGER_RADIUS: f32 = 12.0;
/// Radius of the open-string circle and half-extent of the mute cross.
const MARKER_RADIUS: f32 = 6.0;
/// Stroke width of a barre bar.
const BARRE_WIDTH: f32 = 12.0;

/// Renders a chord diagram to a complete SVG document.
pub(crate) fn document(diagram: &ChordDiagram, style: &StyleConfig) -> svg::Document {
    let layout = FretboardLayout::new(diagram.fret_start(), diagram.frets_visible());
    let line = Stroke::new(style.foreground(), LINE_WIDTH);

    let mut output = LayeredOutput::new();

    output.add(
        RenderLayer::Background,
        Box::new(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", layout.canvas().width())
                .set("height", layout.canvas().height())
                .set("fill", style.background().to_string()),
        ),
    );

    output.add(RenderLayer::Title, title(diagram.name(), &layout, style));

    // A window not anchored at the nut gets a thin boundary and a label
    // naming the starting fret.
    if !layout.at_nut() {
        output.add(
            RenderLayer::FretLabel,
            fret_label(layout.fret_start(), &layout, style),
        );
    }
    let boundary_stroke = if layout.at_nut() {
        line.with_width(NUT_WIDTH)
    } else {
        line.clone()
    };
    output.add(
        RenderLayer::Boundary,
        horizontal_line(
            Point::new(layout.string_x(0), layout.top_y()),
            layout.string_x(STRING_COUNT - 1),
            &boundary_stroke,
        ),
    );

    for row in 1..=layout.frets_visible() {
        output.add(
            RenderLayer::Frets,
            horizontal_line(
                Point::new(layout.string_x(0), layout.fret_line_y(row)),
                layout.string_x(STRING_COUNT - 1),
                &line,
            ),
        );
    }

    for index in 0..STRING_COUNT {
        output.add(
            RenderLayer::Strings,
            vertical_line(
                Point::new(layout.string_x(index), layout.top_y()),
                layout.bottom_y(),
                &line,
            ),
        );
    }

    // Barres first, finger dots after: the layer order already guarantees
    // dots render on top.
    for barre in diagram.barres() {
        if !layout.is_visible(barre.fret) {
            trace!(fret = barre.fret; "Skipping barre outside the visible window");
            continue;
        }
        let from = string_index(barre.from_string);
        let to = string_index(barre.to_string);
        let (lo, hi) = (from.min(to), from.max(to));
        let y = layout.finger_center(lo, barre.fret).y();
        output.add(
            RenderLayer::Barres,
            marker::barre_bar(
                Point::new(layout.string_x(lo), y),
                Point::new(layout.string_x(hi), y),
                &line.with_width(BARRE_WIDTH),
            ),
        );
    }

    for index in 0..STRING_COUNT {
        match diagram.string_state(index) {
            StringState::Muted => output.add(
                RenderLayer::Markers,
                marker::mute_marker(layout.marker_center(index), MARKER_RADIUS, &line),
            ),
            StringState::Open => output.add(
                RenderLayer::Markers,
                marker::open_marker(layout.marker_center(index), MARKER_RADIUS, &line),
            ),
            StringState::Fretted(fret) => {
                // Fingerings outside the window are omitted, not errors.
                if layout.is_visible(fret) {
                    output.add(
                        RenderLayer::Fingers,
                        marker::finger_dot(
                            layout.finger_center(index, fret),
                            FINGER_RADIUS,
                            style.foreground(),
                        ),
                    );
                } else {
                    trace!(string = index, fret; "Skipping finger outside the visible window");
                }
            }
        }
    }

    let mut document = svg::Document::new()
        .set("width", layout.canvas().width())
        .set("height", layout.canvas().height())
        .set(
            "viewBox",
            format!(
                "0 0 {} {}",
                layout.canvas().width(),
                layout.canvas().height()
            ),
        );

    for node in output.render() {
        document = document.add(node);
    }

    document
}

fn title(
    name: &str,
    layout: &FretboardLayout,
    style: &StyleConfig,
) -> Box<dyn svg::Node> {
    let anchor = layout.title_anchor();
    Box::new(
        svg_element::Text::new(name)
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 20)
            .set("fill", style.foreground().to_string()),
    )
}

fn fret_label(
    fret_start: u32,
    layout: &FretboardLayout,
    style: &StyleConfig,
) -> Box<dyn svg::Node> {
    let anchor = layout.fret_label_anchor();
    Box::new(
        svg_element::Text::new(format!("{fret_start}fr"))
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("text-anchor", "end")
            .set("font-family", "sans-serif")
            .set("font-size", 12)
            .set("fill", style.foreground().to_string()),
    )
}

fn horizontal_line(from: Point, to_x: f32, stroke: &Stroke) -> Box<dyn svg::Node> {
    let line = svg_element::Line::new()
        .set("x1", from.x())
        .set("y1", from.y())
        .set("x2", to_x)
        .set("y2", from.y());
    Box::new(apply_stroke!(line, stroke))
}

fn vertical_line(from: Point, to_y: f32, stroke: &Stroke) -> Box<dyn svg::Node> {
    let line = svg_element::Line::new()
        .set("x1", from.x())
        .set("y1", from.y())
        .set("x2", from.x())
        .set("y2", to_y);
    Box::new(apply_stroke!(line, stroke))
}
