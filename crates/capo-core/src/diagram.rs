//! The normalized chord diagram model.
//!
//! This module defines [`ChordDiagram`], the single request type the renderer
//! consumes, along with [`Barre`] spans and the [`Instrument`] identifier.
//!
//! # String numbering
//!
//! Two conventions are in play and must never be mixed up:
//!
//! - **Layout indexing**: low-to-high pitch, 0-indexed. `positions[0]` is the
//!   lowest-pitched string and sits leftmost on the rendered grid.
//! - **Chord notation**: high-to-low pitch, 1-indexed. Barre spans use this
//!   convention (string 1 is the highest-pitched string), matching how chords
//!   are written in practice.
//!
//! [`string_index`] is the one conversion point between the two. Use it;
//! do not inline the arithmetic.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Number of strings on the supported instrument.
pub const STRING_COUNT: usize = 6;

/// Marker value in `positions` for a muted string.
pub const MUTED: i32 = -1;

/// Marker value in `positions` for an open string.
pub const OPEN: i32 = 0;

/// Errors produced while constructing or validating a [`ChordDiagram`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    /// The positions sequence did not have exactly one entry per string.
    #[error("positions must have 6 values for guitar")]
    PositionCount(usize),
}

/// The instrument a diagram is laid out for.
///
/// Only six-string guitar is supported; any other identifier is rejected
/// before a request reaches the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Instrument {
    /// Six-string fretted guitar.
    #[default]
    Guitar,
}

impl Instrument {
    /// Returns the canonical identifier for this instrument.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Guitar => "guitar",
        }
    }
}

impl FromStr for Instrument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guitar" => Ok(Self::Guitar),
            _ => Err(format!(
                "unsupported instrument `{s}`, valid values: guitar"
            )),
        }
    }
}

/// A single finger (or bar) pressing several strings at the same fret.
///
/// String numbers follow chord notation: high-to-low pitch, 1..=6. Convert to
/// layout indices with [`string_index`] before doing any geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    /// Fret the bar is pressed at.
    pub fret: u32,
    /// First string covered, in chord notation (1 = highest pitch).
    pub from_string: u8,
    /// Last string covered, in chord notation.
    pub to_string: u8,
}

impl Barre {
    /// Creates a new barre span.
    pub fn new(fret: u32, from_string: u8, to_string: u8) -> Self {
        Self {
            fret,
            from_string,
            to_string,
        }
    }
}

/// Converts a chord-notation string number (high-to-low, 1..=6) to the
/// layout index (low-to-high, 0..=5).
///
/// Out-of-range numbers are clamped into 1..=6 first, so the result is always
/// a valid layout index and a malformed barre can never push geometry off the
/// canvas.
///
/// # Examples
///
/// ```
/// # use capo_core::diagram::string_index;
/// assert_eq!(string_index(6), 0); // lowest-pitched string, leftmost
/// assert_eq!(string_index(1), 5); // highest-pitched string, rightmost
/// ```
pub fn string_index(string_number: u8) -> usize {
    let clamped = string_number.clamp(1, STRING_COUNT as u8);
    STRING_COUNT - clamped as usize
}

/// What a string is doing in a chord, derived from its position value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringState {
    /// The string is not played (`-1`).
    Muted,
    /// The string rings open (`0`).
    Open,
    /// The string is pressed at the given fret (positive values).
    Fretted(u32),
}

/// A normalized chord diagram description.
///
/// This is the single input type of the renderer. Both request adapters (the
/// query-parameter form and the JSON-body form) produce it, so the renderer
/// never sees transport details.
///
/// Construction validates the one hard invariant: `positions` has exactly one
/// entry per string. Everything else is lenient; see [`Barre`].
///
/// # Examples
///
/// ```
/// # use capo_core::diagram::ChordDiagram;
/// let cmaj = ChordDiagram::new("Cmaj", vec![-1, 3, 2, 0, 1, 0]).unwrap();
/// assert_eq!(cmaj.fret_start(), 1);
/// assert_eq!(cmaj.frets_visible(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChordDiagram {
    name: String,
    positions: Vec<i32>,
    fret_start: u32,
    frets_visible: u32,
    barres: Vec<Barre>,
}

impl ChordDiagram {
    /// Default display label when a request supplies none.
    pub const DEFAULT_NAME: &'static str = "Chord";

    /// Default fret shown at the top of the diagram.
    pub const DEFAULT_FRET_START: u32 = 1;

    /// Default number of fret rows drawn.
    pub const DEFAULT_FRETS_VISIBLE: u32 = 5;

    /// Creates a diagram with the given name and positions.
    ///
    /// `positions` is ordered lowest-pitch string first; each value is `-1`
    /// (muted), `0` (open), or a positive fret number. `fret_start` and
    /// `frets_visible` take their defaults and can be adjusted with the
    /// `with_*` builders.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::PositionCount`] unless `positions` has exactly
    /// 6 entries.
    pub fn new(name: impl Into<String>, positions: Vec<i32>) -> Result<Self, DiagramError> {
        if positions.len() != STRING_COUNT {
            log::debug!(found = positions.len(); "Rejecting positions of wrong length");
            return Err(DiagramError::PositionCount(positions.len()));
        }

        Ok(Self {
            name: name.into(),
            positions,
            fret_start: Self::DEFAULT_FRET_START,
            frets_visible: Self::DEFAULT_FRETS_VISIBLE,
            barres: Vec::new(),
        })
    }

    /// Sets the fret number shown at the top of the diagram.
    ///
    /// Values below 1 are coerced to 1.
    pub fn with_fret_start(mut self, fret_start: u32) -> Self {
        self.fret_start = fret_start.max(1);
        self
    }

    /// Sets the number of fret rows drawn.
    ///
    /// Values below 1 are coerced to 1.
    pub fn with_frets_visible(mut self, frets_visible: u32) -> Self {
        self.frets_visible = frets_visible.max(1);
        self
    }

    /// Sets the barre spans.
    pub fn with_barres(mut self, barres: Vec<Barre>) -> Self {
        self.barres = barres;
        self
    }

    /// Returns the display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the per-string positions, lowest-pitch string first.
    pub fn positions(&self) -> &[i32] {
        &self.positions
    }

    /// Returns the fret number shown at the top of the diagram.
    pub fn fret_start(&self) -> u32 {
        self.fret_start
    }

    /// Returns the number of fret rows drawn.
    pub fn frets_visible(&self) -> u32 {
        self.frets_visible
    }

    /// Returns the barre spans.
    pub fn barres(&self) -> &[Barre] {
        &self.barres
    }

    /// Returns the state of the string at the given layout index.
    ///
    /// Negative position values mean muted, zero means open, positive values
    /// are the pressed fret.
    pub fn string_state(&self, index: usize) -> StringState {
        match self.positions[index] {
            p if p < OPEN => StringState::Muted,
            OPEN => StringState::Open,
            p => StringState::Fretted(p as u32),
        }
    }

    /// Re-checks the positions invariant.
    ///
    /// Diagrams built through [`ChordDiagram::new`] always pass; the renderer
    /// still calls this first so validation stays at the front of the
    /// operation regardless of how the value was produced.
    pub fn validate(&self) -> Result<(), DiagramError> {
        if self.positions.len() != STRING_COUNT {
            return Err(DiagramError::PositionCount(self.positions.len()));
        }
        Ok(())
    }
}

impl Default for ChordDiagram {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            positions: vec![OPEN; STRING_COUNT],
            fret_start: Self::DEFAULT_FRET_START,
            frets_visible: Self::DEFAULT_FRETS_VISIBLE,
            barres: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_six_positions() {
        let too_short = ChordDiagram::new("X", vec![0, 0, 0, 0, 0]);
        assert_eq!(too_short.unwrap_err(), DiagramError::PositionCount(5));

        let too_long = ChordDiagram::new("X", vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(too_long.unwrap_err(), DiagramError::PositionCount(7));

        assert!(ChordDiagram::new("X", vec![-1, 3, 2, 0, 1, 0]).is_ok());
    }

    #[test]
    fn test_position_count_message() {
        let err = ChordDiagram::new("X", vec![0; 7]).unwrap_err();
        assert_eq!(err.to_string(), "positions must have 6 values for guitar");
    }

    #[test]
    fn test_string_index_conversion() {
        // Chord notation is high-to-low; layout is low-to-high.
        assert_eq!(string_index(1), 5);
        assert_eq!(string_index(2), 4);
        assert_eq!(string_index(3), 3);
        assert_eq!(string_index(4), 2);
        assert_eq!(string_index(5), 1);
        assert_eq!(string_index(6), 0);
    }

    #[test]
    fn test_string_index_clamps_out_of_range() {
        // 0 clamps up to string 1 (rightmost); everything above 6 clamps
        // down to string 6 (leftmost).
        assert_eq!(string_index(0), 5);
        assert_eq!(string_index(7), 0);
        assert_eq!(string_index(255), 0);
    }

    #[test]
    fn test_string_state() {
        let diagram = ChordDiagram::new("Cmaj", vec![-1, 3, 2, 0, 1, 0]).unwrap();
        assert_eq!(diagram.string_state(0), StringState::Muted);
        assert_eq!(diagram.string_state(1), StringState::Fretted(3));
        assert_eq!(diagram.string_state(3), StringState::Open);
    }

    #[test]
    fn test_builders_coerce_zero() {
        let diagram = ChordDiagram::default()
            .with_fret_start(0)
            .with_frets_visible(0);
        assert_eq!(diagram.fret_start(), 1);
        assert_eq!(diagram.frets_visible(), 1);
    }

    #[test]
    fn test_instrument_from_str() {
        assert_eq!(Instrument::from_str("guitar").unwrap(), Instrument::Guitar);

        let result = Instrument::from_str("piano");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("unsupported instrument"));
    }

    #[test]
    fn test_barre_deserializes_camel_case() {
        let barre: Barre =
            serde_json::from_str(r#"{"fret": 1, "fromString": 6, "toString": 1}"#).unwrap();
        assert_eq!(barre, Barre::new(1, 6, 1));
    }
}
