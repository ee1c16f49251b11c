//! DOT label extraction for Constellation.
//!
//! This crate turns a Graphviz DOT source text into the [`LabelSet`] of label
//! attribute values it declares. Parsing is delegated to [`graphviz-rust`];
//! this crate only walks the parsed statement tree.
//!
//! [`LabelSet`]: constellation_core::label::LabelSet
//! [`graphviz-rust`]: https://docs.rs/graphviz-rust

pub mod error;

mod extract;

pub use error::ExtractError;
pub use extract::extract_labels;
