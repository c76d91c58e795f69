//! SVG drawing primitives for chord diagrams.
//!
//! - [`RenderLayer`] / [`LayeredOutput`]: z-ordered collection of SVG nodes
//! - [`Stroke`]: line style applied through [`apply_stroke!`](crate::apply_stroke!)
//! - [`marker`]: the per-string markers (finger dot, open circle, mute cross,
//!   barre bar)

mod layer;
pub mod marker;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::Stroke;
