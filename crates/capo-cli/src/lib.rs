//! CLI logic for the Capo chord diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::fs;

use log::info;

use capo::{CapoError, ChordRenderer, data::ReferenceData, library};

/// Run the Capo CLI application
///
/// Dispatches on the subcommand: renders a chord or built-in shape to an SVG
/// file, or prints a scale from the reference data.
///
/// # Errors
///
/// Returns `CapoError` for:
/// - Invalid request parameters
/// - Unknown shape or scale lookups
/// - File I/O and configuration loading errors
pub fn run(args: &Args) -> Result<(), CapoError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Render {
            name,
            pos,
            fret_start,
            frets_visible,
            output,
        } => {
            info!(name, pos; "Rendering chord from arguments");

            // Route through the query adapter so the CLI and the
            // query-string transport validate identically.
            let renderer = ChordRenderer::new(app_config);
            let diagram = renderer.parse_query([
                ("name", name.as_str()),
                ("pos", pos.as_str()),
                ("fretStart", fret_start.as_str()),
                ("fretsVisible", frets_visible.as_str()),
            ])?;

            let rendered = renderer.render(&diagram)?;
            fs::write(output, rendered.svg())?;

            info!(output_file = output, hash = rendered.hash(); "SVG exported successfully");
        }

        Command::Shape { name, output } => {
            let diagram =
                library::shape(name).ok_or_else(|| CapoError::UnknownShape(name.clone()))?;

            let rendered = ChordRenderer::new(app_config).render(diagram)?;
            fs::write(output, rendered.svg())?;

            info!(shape = name, output_file = output; "SVG exported successfully");
        }

        Command::Scale { note, mode } => {
            let data = ReferenceData::load(app_config.data().dir())?;
            let scale = data
                .scale(note, mode)
                .ok_or_else(|| CapoError::ScaleNotFound {
                    note: note.clone(),
                    mode: mode.clone(),
                })?;

            println!("{scale}");
        }
    }

    Ok(())
}
