//! Layer-based rendering system for SVG output.
//!
//! A chord diagram is a fixed stack of primitives: the background at the
//! bottom, finger dots on top (so dots always cover barre bars). Each drawable
//! declares which [`RenderLayer`] it belongs to and [`LayeredOutput`] emits
//! the layers in order.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output, bottom to top.
///
/// The `Ord` derive uses declaration order, so the first variant renders
/// first (bottom) and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background fill - renders first
    Background,
    /// The chord name centered above the grid
    Title,
    /// Starting-fret label shown when the window is not anchored at the nut
    FretLabel,
    /// The top boundary line (nut or window top)
    Boundary,
    /// Horizontal fret lines
    Frets,
    /// Vertical string lines
    Strings,
    /// Open/mute markers above the boundary
    Markers,
    /// Barre bars across string spans
    Barres,
    /// Finger dots - render last so they sit on top of barres
    Fingers,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Title => "title",
            Self::FretLabel => "fret-label",
            Self::Boundary => "boundary",
            Self::Frets => "frets",
            Self::Strings => "strings",
            Self::Markers => "markers",
            Self::Barres => "barres",
            Self::Fingers => "fingers",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// Nodes are collected in any order and emitted grouped by layer, bottom to
/// top. Within a layer, insertion order is preserved (the sort is stable), so
/// output bytes are a deterministic function of the input.
///
/// # Example
///
/// ```
/// # use capo_core::draw::{RenderLayer, LayeredOutput};
/// # use svg::node::element::{Circle, Rectangle};
/// let mut output = LayeredOutput::new();
/// output.add(RenderLayer::Fingers, Box::new(Circle::new()));
/// output.add(RenderLayer::Background, Box::new(Rectangle::new()));
///
/// let nodes = output.render();
/// assert_eq!(nodes.len(), 2); // background group first, fingers group last
/// ```
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes are appended to the layer in the order they are added.
    pub fn add(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    ///
    /// # Returns
    ///
    /// A vector of SVG group nodes, one per non-empty layer, in rendering
    /// order (bottom to top).
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort: preserves insertion order within a layer.
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Rectangle};

    use super::*;

    #[test]
    fn test_layered_output_new_is_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_groups_by_layer() {
        let mut output = LayeredOutput::new();
        output.add(RenderLayer::Strings, Box::new(Rectangle::new()));
        output.add(RenderLayer::Strings, Box::new(Rectangle::new()));
        output.add(RenderLayer::Background, Box::new(Rectangle::new()));

        let nodes = output.render();
        // Two groups: background and strings.
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_fingers_render_after_barres() {
        let mut output = LayeredOutput::new();
        output.add(RenderLayer::Fingers, Box::new(Circle::new()));
        output.add(RenderLayer::Barres, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert!(rendered[0].contains("data-layer=\"barres\""));
        assert!(rendered[1].contains("data-layer=\"fingers\""));
    }

    #[test]
    fn test_layer_names() {
        assert_eq!(RenderLayer::Background.name(), "background");
        assert_eq!(RenderLayer::FretLabel.name(), "fret-label");
        assert_eq!(RenderLayer::Fingers.name(), "fingers");
    }
}
