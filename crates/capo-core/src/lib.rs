//! Capo Core Types and Definitions
//!
//! This crate provides the foundational types for rendering fretted-instrument
//! chord diagrams. It includes:
//!
//! - **Diagram model**: The normalized chord description ([`diagram::ChordDiagram`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: SVG drawing primitives and z-ordering ([`draw`] module)

pub mod diagram;
pub mod draw;
pub mod geometry;
