//! Error type for the request adapters.
//!
//! Every variant means the same thing to a caller: the request data was
//! malformed or out of contract (invalid input). Messages are written to be
//! returned to clients as-is, so they name the offending field and show the
//! expected shape where that helps.

use thiserror::Error;

use capo_core::diagram::DiagramError;

/// Error produced while parsing a request into a chord diagram.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A required parameter was absent from the request.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// The `pos` list contained something that is not an integer.
    #[error("invalid position `{0}`: pos must be comma-separated integers, e.g. -1,3,2,0,1,0")]
    InvalidPosition(String),

    /// An integer-valued field could not be parsed.
    #[error("`{field}` must be an integer, got `{value}`")]
    InvalidInteger {
        field: &'static str,
        value: String,
    },

    /// The request named an instrument the renderer does not support.
    #[error("{0}")]
    UnsupportedInstrument(String),

    /// The JSON body was malformed or missing required structure.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// The normalized diagram violated a model invariant.
    #[error(transparent)]
    Diagram(#[from] DiagramError),
}
