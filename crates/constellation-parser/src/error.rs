//! Error types for label extraction.

use thiserror::Error;

/// Error type for DOT label extraction.
///
/// Extraction failure is never fatal to the engine: a diagram whose source
/// cannot be parsed is loaded with an empty label set and simply participates
/// in zero relationships. The error is still typed so callers can decide how
/// loudly to report it.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The DOT source could not be parsed.
    ///
    /// The message comes from the underlying parser verbatim.
    #[error("DOT syntax error: {0}")]
    Syntax(String),
}
