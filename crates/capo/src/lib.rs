//! Capo - chord diagram rendering and music-theory reference data.
//!
//! Parses chord requests (query-parameter or JSON form), renders them as SVG
//! chord diagrams on a fixed 260×360 canvas, and serves read-only reference
//! data (notes, modes, scales) from on-disk JSON.

pub mod config;
pub mod data;
pub mod library;
pub mod response;

mod error;
mod export;
mod hash;
mod layout;

pub use capo_core::{diagram, draw, geometry};

pub use error::CapoError;
pub use hash::content_hash;
pub use layout::FretboardLayout;

use log::{debug, info};

use capo_core::diagram::ChordDiagram;

use config::AppConfig;

/// A rendered chord diagram: the SVG text plus its content hash.
///
/// Produced fresh on every render and never cached here; the hash exists so
/// callers can do their own cache validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    svg: String,
    hash: String,
}

impl RenderedDiagram {
    /// Returns the SVG document text.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Returns the content hash of the SVG bytes (lowercase hex).
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Consumes the value, returning `(svg, hash)`.
    pub fn into_parts(self) -> (String, String) {
        (self.svg, self.hash)
    }
}

/// Front door for parsing and rendering chord diagrams.
///
/// # Examples
///
/// ```
/// use capo::{ChordRenderer, config::AppConfig};
///
/// let renderer = ChordRenderer::new(AppConfig::default());
///
/// let diagram = renderer
///     .parse_query([("name", "Cmaj"), ("pos", "-1,3,2,0,1,0")])
///     .expect("valid request");
///
/// let rendered = renderer.render(&diagram).expect("valid diagram");
/// assert!(rendered.svg().starts_with("<svg"));
/// assert_eq!(rendered.hash().len(), 64);
/// ```
#[derive(Default)]
pub struct ChordRenderer {
    config: AppConfig,
}

impl ChordRenderer {
    /// Creates a renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parses query-style key-value parameters into a normalized diagram.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::InvalidInput`] for missing or malformed
    /// parameters and unsupported instruments.
    pub fn parse_query<'a, I>(&self, params: I) -> Result<ChordDiagram, CapoError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Ok(capo_parser::parse_query(params)?)
    }

    /// Parses a JSON request body into a normalized diagram.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::InvalidInput`] for malformed JSON, a wrong-length
    /// positions array, or an unsupported instrument.
    pub fn parse_json(&self, body: &str) -> Result<ChordDiagram, CapoError> {
        Ok(capo_parser::parse_json(body)?)
    }

    /// Renders a diagram to SVG and computes its content hash.
    ///
    /// Pure and deterministic: identical input always yields byte-identical
    /// SVG and an identical hash.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::InvalidInput`] when the diagram fails validation.
    pub fn render(&self, diagram: &ChordDiagram) -> Result<RenderedDiagram, CapoError> {
        diagram.validate()?;

        info!(name = diagram.name(); "Rendering chord diagram");

        let document = export::svg::document(diagram, self.config.style());
        let svg = document.to_string();
        let hash = content_hash(svg.as_bytes());

        debug!(bytes = svg.len(), hash; "Diagram rendered");

        Ok(RenderedDiagram { svg, hash })
    }
}
