//! JSON-body request adapter.
//!
//! Parses a JSON document of the shape
//!
//! ```json
//! {
//!   "instrument": "guitar",
//!   "meta": { "name": "Cmaj" },
//!   "diagram": {
//!     "positions": [-1, 3, 2, 0, 1, 0],
//!     "fretStart": 1,
//!     "fretsVisible": 5,
//!     "barres": [{ "fret": 1, "fromString": 6, "toString": 1 }]
//!   }
//! }
//! ```
//!
//! into a normalized chord diagram. Positions arrive as integers here, so the
//! only text parsing is serde's.

use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use capo_core::diagram::{Barre, ChordDiagram, Instrument};

use crate::error::ParseError;

#[derive(Debug, Deserialize)]
struct RequestBody {
    instrument: Option<String>,
    #[serde(default)]
    meta: Meta,
    diagram: DiagramBody,
}

#[derive(Debug, Default, Deserialize)]
struct Meta {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiagramBody {
    positions: Vec<i32>,
    fret_start: Option<u32>,
    frets_visible: Option<u32>,
    #[serde(default)]
    barres: Vec<Barre>,
}

/// Parses a JSON request body into a [`ChordDiagram`].
///
/// Missing optional fields take the same defaults as the query form; the
/// instrument, when present, must be `guitar`.
///
/// # Errors
///
/// Returns [`ParseError`] for malformed JSON, a wrong-length positions array,
/// or an unsupported instrument.
pub fn parse_json(body: &str) -> Result<ChordDiagram, ParseError> {
    let request: RequestBody = serde_json::from_str(body)?;

    if let Some(instrument) = &request.instrument {
        Instrument::from_str(instrument).map_err(ParseError::UnsupportedInstrument)?;
    }

    let name = request
        .meta
        .name
        .unwrap_or_else(|| ChordDiagram::DEFAULT_NAME.to_string());
    let body = request.diagram;

    debug!(name, barre_count = body.barres.len(); "Parsed JSON-form chord request");

    Ok(ChordDiagram::new(name, body.positions)?
        .with_fret_start(body.fret_start.unwrap_or(ChordDiagram::DEFAULT_FRET_START))
        .with_frets_visible(
            body.frets_visible
                .unwrap_or(ChordDiagram::DEFAULT_FRETS_VISIBLE),
        )
        .with_barres(body.barres))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_body() {
        let diagram = parse_json(
            r#"{
                "instrument": "guitar",
                "meta": { "name": "F" },
                "diagram": {
                    "positions": [1, 3, 3, 2, 1, 1],
                    "fretStart": 1,
                    "fretsVisible": 5,
                    "barres": [{ "fret": 1, "fromString": 6, "toString": 1 }]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(diagram.name(), "F");
        assert_eq!(diagram.positions(), &[1, 3, 3, 2, 1, 1]);
        assert_eq!(diagram.barres(), &[Barre::new(1, 6, 1)]);
    }

    #[test]
    fn test_minimal_body_uses_defaults() {
        let diagram =
            parse_json(r#"{ "diagram": { "positions": [0, 2, 2, 1, 0, 0] } }"#).unwrap();
        assert_eq!(diagram.name(), "Chord");
        assert_eq!(diagram.fret_start(), 1);
        assert_eq!(diagram.frets_visible(), 5);
        assert!(diagram.barres().is_empty());
    }

    #[test]
    fn test_wrong_positions_length_rejected() {
        let err =
            parse_json(r#"{ "diagram": { "positions": [1, 2, 3, 4, 5, 6, 7] } }"#).unwrap_err();
        assert_eq!(err.to_string(), "positions must have 6 values for guitar");
    }

    #[test]
    fn test_unsupported_instrument_rejected() {
        let err = parse_json(
            r#"{ "instrument": "piano", "diagram": { "positions": [0, 0, 0, 0, 0, 0] } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedInstrument(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = parse_json("{ not json").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
