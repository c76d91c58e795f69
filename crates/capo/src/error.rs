//! Error types for Capo operations.
//!
//! [`CapoError`] is the top-level error. Invalid request data surfaces as
//! [`CapoError::InvalidInput`]; everything else (I/O, bad data files, missing
//! scales) stays a distinct variant so callers can tell a client mistake from
//! a server-side problem.

use std::{io, path::PathBuf};

use thiserror::Error;

use capo_core::diagram::DiagramError;
use capo_parser::ParseError;

/// The main error type for Capo operations.
#[derive(Debug, Error)]
pub enum CapoError {
    /// Malformed or out-of-contract request data.
    #[error("{0}")]
    InvalidInput(#[from] ParseError),

    /// I/O failure reading data or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A reference data file did not contain valid JSON.
    #[error("invalid reference data in {path}: {err}")]
    Data {
        path: PathBuf,
        err: serde_json::Error,
    },

    /// No scale exists for the requested note and mode.
    #[error("scale not found for {note} {mode}")]
    ScaleNotFound { note: String, mode: String },

    /// No built-in chord shape with the requested name.
    #[error("unknown chord shape `{0}`")]
    UnknownShape(String),
}

impl From<DiagramError> for CapoError {
    fn from(err: DiagramError) -> Self {
        Self::InvalidInput(err.into())
    }
}

impl CapoError {
    /// True when the error is the client's fault rather than the server's.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
