//! CLI logic for the Constellation diagram canvas.
//!
//! This module contains the core CLI logic for the Constellation tool.

pub mod error_adapter;

mod args;
mod config;
mod report;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use constellation::{Canvas, ConnectionMode, ConstellationError, LoadOutcome};

/// Run the Constellation CLI application
///
/// This function loads every input DOT file onto a canvas, applies the view
/// settings from the configuration and the command line, and writes the
/// materialized connection report to the output file or stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ConstellationError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - An invalid `--mode` value
pub fn run(args: &Args) -> Result<(), ConstellationError> {
    info!(input_count = args.inputs.len(); "Processing diagrams");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let mut canvas = Canvas::new(app_config);

    // Load every input file; repeated names are skipped, not errors.
    let mut loaded = 0usize;
    let mut skipped = 0usize;
    for input in &args.inputs {
        let source = fs::read_to_string(input)?;
        match canvas.load_source(&diagram_name(input), &source)? {
            LoadOutcome::Loaded(_) => loaded += 1,
            LoadOutcome::Duplicate(_) => skipped += 1,
        }
    }
    info!(loaded, skipped; "Diagrams loaded");

    // Command-line settings override the configuration.
    if let Some(mode) = &args.mode {
        let mode: ConnectionMode = mode.parse().map_err(ConstellationError::Config)?;
        canvas.set_connection_mode(mode);
    }
    if let Some(min_shared) = args.min_shared {
        canvas.set_min_shared_labels(min_shared);
    }
    if args.hide_transitive {
        canvas.set_hide_transitive(true);
    }

    let connections = canvas.connections();
    let report = report::render(&canvas, &connections);

    match &args.output {
        Some(path) => {
            fs::write(path, report)?;
            info!(output_file = path.as_str(); "Report written");
        }
        None => print!("{report}"),
    }

    Ok(())
}

/// Derives a diagram name from an input path: the file stem, or the path
/// itself when there is none.
fn diagram_name(input: &str) -> String {
    Path::new(input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string())
}
