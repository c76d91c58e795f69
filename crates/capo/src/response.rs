//! Transport-agnostic response envelope.
//!
//! Adapters exposing the renderer over some transport wrap results here: a
//! successful render carries the SVG body, its content type, a cache
//! directive permitting bounded reuse, and the content hash as a validation
//! token. Failures carry a client-friendly status and a plain-text message.

use crate::{RenderedDiagram, error::CapoError};

/// Content type of a rendered diagram body.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Cache directive attached to successful responses (one day of reuse).
pub const CACHE_CONTROL: &str = "public, max-age=86400";

/// A successful diagram response.
#[derive(Debug, Clone)]
pub struct SvgResponse {
    body: String,
    etag: String,
}

impl SvgResponse {
    /// Wraps a rendered diagram, taking its hash as the validation token.
    pub fn new(rendered: RenderedDiagram) -> Self {
        let (body, etag) = rendered.into_parts();
        Self { body, etag }
    }

    /// Returns the SVG body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the content type for the body.
    pub fn content_type(&self) -> &'static str {
        SVG_CONTENT_TYPE
    }

    /// Returns the cache directive.
    pub fn cache_control(&self) -> &'static str {
        CACHE_CONTROL
    }

    /// Returns the validation token (the content hash of the body).
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Consumes the response, returning the body.
    pub fn into_body(self) -> String {
        self.body
    }
}

/// A failed response: status code plus a human-readable plain-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    status: u16,
    message: String,
}

impl ErrorResponse {
    /// Returns the status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the plain-text message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&CapoError> for ErrorResponse {
    fn from(err: &CapoError) -> Self {
        let status = match err {
            CapoError::InvalidInput(_) => 400,
            CapoError::ScaleNotFound { .. } | CapoError::UnknownShape(_) => 404,
            CapoError::Io(_) | CapoError::Data { .. } => 500,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use capo_core::diagram::DiagramError;

    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let err: CapoError = DiagramError::PositionCount(7).into();
        let response = ErrorResponse::from(&err);
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.message(),
            "positions must have 6 values for guitar"
        );
    }

    #[test]
    fn test_missing_scale_maps_to_404() {
        let err = CapoError::ScaleNotFound {
            note: "H".to_string(),
            mode: "ionian".to_string(),
        };
        let response = ErrorResponse::from(&err);
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn test_io_maps_to_500() {
        let err = CapoError::Io(std::io::Error::other("boom"));
        assert_eq!(ErrorResponse::from(&err).status(), 500);
    }
}
