//! Error types for Constellation operations.
//!
//! This module provides the main error type [`ConstellationError`] which wraps
//! the failure conditions that can occur while driving the canvas.
//!
//! Label-extraction failure is deliberately absent: a diagram whose source
//! cannot be parsed is loaded with an empty label set and simply participates
//! in zero relationships. Every id-addressed mutation, on the other hand,
//! fails loudly — a lookup miss there means the caller and the engine have
//! desynchronized, which must not be papered over.

use std::io;

use thiserror::Error;

use constellation_core::identifier::Id;

/// The main error type for Constellation operations.
#[derive(Debug, Error)]
pub enum ConstellationError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown diagram: {0}")]
    UnknownDiagram(Id),

    #[error("Diagram already loaded: {0}")]
    DuplicateDiagram(Id),

    #[error("Configuration error: {0}")]
    Config(String),
}
