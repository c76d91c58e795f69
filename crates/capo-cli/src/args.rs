//! Command-line argument definitions for the Capo CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select a subcommand (render a chord, look up a
//! built-in shape, query the reference data) plus configuration file
//! selection and logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Capo chord diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// Subcommands of the Capo CLI
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a chord diagram to an SVG file
    Render {
        /// Display name shown above the diagram
        #[arg(long, default_value = "Chord")]
        name: String,

        /// Comma-separated string positions, lowest-pitch string first
        /// (-1 muted, 0 open, positive fret number)
        #[arg(long)]
        pos: String,

        /// Fret number shown at the top of the diagram
        #[arg(long, default_value = "1")]
        fret_start: String,

        /// Number of fret rows drawn
        #[arg(long, default_value = "5")]
        frets_visible: String,

        /// Path to the output SVG file
        #[arg(short, long, default_value = "out.svg")]
        output: String,
    },

    /// Render a built-in chord shape by name
    Shape {
        /// Shape name (e.g. C, Am, F)
        name: String,

        /// Path to the output SVG file
        #[arg(short, long, default_value = "out.svg")]
        output: String,
    },

    /// Look up a scale in the reference data and print it as JSON
    Scale {
        /// Root note (e.g. C, F#)
        note: String,

        /// Mode name (e.g. ionian, dorian)
        mode: String,
    },
}
