//! Read-only music-theory reference data.
//!
//! Notes, modes, and scales live in a directory of JSON files and are loaded
//! once at startup into [`ReferenceData`]. The store is immutable after
//! loading, so any number of concurrent readers can share it without
//! coordination.
//!
//! The scales document is an array of single-key objects, one per root note:
//!
//! ```json
//! [
//!   { "C": { "ionian": ["C", "D", "E", "F", "G", "A", "B"] } },
//!   { "D": { "ionian": ["D", "E", "F#", "G", "A", "B", "C#"] } }
//! ]
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde_json::Value;

use crate::error::CapoError;

/// File holding the note names.
const NOTES_FILE: &str = "notes.json";
/// File holding the mode descriptions. The data set ships as `modos.json`.
const MODES_FILE: &str = "modos.json";
/// File holding the per-note scale tables.
const SCALES_FILE: &str = "scales.json";

/// In-memory copy of the on-disk reference data.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    notes: Value,
    modes: Value,
    scales: Value,
}

impl ReferenceData {
    /// Loads all reference data from the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`CapoError::Io`] when a file cannot be read and
    /// [`CapoError::Data`] when a file is not valid JSON.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, CapoError> {
        let dir = dir.as_ref();
        info!(dir = dir.display().to_string(); "Loading reference data");

        Ok(Self {
            notes: load_json(&dir.join(NOTES_FILE))?,
            modes: load_json(&dir.join(MODES_FILE))?,
            scales: load_json(&dir.join(SCALES_FILE))?,
        })
    }

    /// Returns the notes document.
    pub fn notes(&self) -> &Value {
        &self.notes
    }

    /// Returns the modes document.
    pub fn modes(&self) -> &Value {
        &self.modes
    }

    /// Looks up the scale for a root note and mode.
    ///
    /// Scans the scales array for an object keyed by `note`, then looks up
    /// `mode` within it. Returns `None` when either is absent.
    pub fn scale(&self, note: &str, mode: &str) -> Option<&Value> {
        self.scales
            .as_array()?
            .iter()
            .find_map(|entry| entry.get(note))
            .and_then(|modes| modes.get(mode))
    }

    /// Reports whether the store is ready to serve.
    ///
    /// Loading is the only failure point; a constructed store is always
    /// healthy.
    pub fn health(&self) -> bool {
        true
    }
}

fn load_json(path: &PathBuf) -> Result<Value, CapoError> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|err| CapoError::Data {
        path: path.clone(),
        err,
    })
}
