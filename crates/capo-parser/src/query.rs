//! Query-parameter request adapter.
//!
//! Parses flat key-value parameters into a normalized chord diagram. All
//! values arrive as text; this parser owns the text-to-integer conversion and
//! its error messages.
//!
//! Recognized parameters:
//!
//! | Parameter      | Required | Default   |
//! |----------------|----------|-----------|
//! | `instrument`   | no       | `guitar`  |
//! | `name`         | no       | `Chord`   |
//! | `pos`          | yes      | —         |
//! | `fretStart`    | no       | `1`       |
//! | `fretsVisible` | no       | `5`       |

use std::collections::HashMap;
use std::str::FromStr;

use log::debug;

use capo_core::diagram::{ChordDiagram, DiagramError, Instrument, STRING_COUNT};

use crate::error::ParseError;

/// Parses query-style key-value parameters into a [`ChordDiagram`].
///
/// The iterator item order does not matter; if a key repeats, the last value
/// wins. Validation order (first failure wins): instrument, presence of
/// `pos`, positions count, position integers, `fretStart`, `fretsVisible`.
///
/// # Errors
///
/// Returns [`ParseError`] when `pos` is missing, any integer field fails to
/// parse, the positions count is not 6, or the instrument is unsupported.
///
/// # Examples
///
/// ```
/// # use capo_parser::parse_query;
/// let diagram = parse_query([
///     ("name", "Cmaj"),
///     ("pos", "-1,3,2,0,1,0"),
/// ]).unwrap();
/// assert_eq!(diagram.name(), "Cmaj");
/// ```
pub fn parse_query<'a, I>(params: I) -> Result<ChordDiagram, ParseError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let params: HashMap<&str, &str> = params.into_iter().collect();

    if let Some(instrument) = params.get("instrument") {
        Instrument::from_str(instrument).map_err(ParseError::UnsupportedInstrument)?;
    }

    let pos = params
        .get("pos")
        .copied()
        .ok_or(ParseError::MissingParameter("pos"))?;
    let positions = parse_positions(pos)?;

    let name = params.get("name").copied().unwrap_or(ChordDiagram::DEFAULT_NAME);
    let fret_start = parse_integer(&params, "fretStart", ChordDiagram::DEFAULT_FRET_START)?;
    let frets_visible = parse_integer(
        &params,
        "fretsVisible",
        ChordDiagram::DEFAULT_FRETS_VISIBLE,
    )?;

    debug!(name, fret_start, frets_visible; "Parsed query-form chord request");

    Ok(ChordDiagram::new(name, positions)?
        .with_fret_start(fret_start)
        .with_frets_visible(frets_visible))
}

/// Parses the comma-separated `pos` list.
///
/// The count is checked before the individual values so a wrong-length list
/// reports the positions invariant rather than a stray parse error.
fn parse_positions(pos: &str) -> Result<Vec<i32>, ParseError> {
    let raw: Vec<&str> = pos.split(',').map(str::trim).collect();
    if raw.len() != STRING_COUNT {
        return Err(DiagramError::PositionCount(raw.len()).into());
    }

    raw.into_iter()
        .map(|value| {
            value
                .parse::<i32>()
                .map_err(|_| ParseError::InvalidPosition(value.to_string()))
        })
        .collect()
}

fn parse_integer(
    params: &HashMap<&str, &str>,
    field: &'static str,
    default: u32,
) -> Result<u32, ParseError> {
    match params.get(field) {
        None => Ok(default),
        Some(value) => value.trim().parse::<u32>().map_err(|_| {
            ParseError::InvalidInteger {
                field,
                value: value.to_string(),
            }
        }),
    }
}
