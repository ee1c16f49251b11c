//! Constellation - a relationship canvas for Graphviz DOT diagrams.
//!
//! Load multiple independent DOT diagrams onto one canvas and discover the
//! structural relationships between them: two diagrams are connected when the
//! sets of `label` attribute values they declare overlap, and the connection
//! is directed when one set contains the other.
//!
//! The engine classifies every diagram pair once per collection generation,
//! memoizes the results, and re-filters them against the current visibility
//! flags and view settings on every connection query. All work is
//! synchronous and in-memory.
//!
//! # Examples
//!
//! ```
//! use constellation::{Canvas, ConnectionLine, config::AppConfig};
//!
//! let mut canvas = Canvas::new(AppConfig::default());
//!
//! canvas
//!     .load_source("storefront", r#"digraph { a [label="catalog"]; b [label="checkout"]; }"#)
//!     .expect("diagram loads");
//! canvas
//!     .load_source("payments", r#"digraph { x [label="checkout"]; y [label="billing"]; }"#)
//!     .expect("diagram loads");
//!
//! for line in canvas.connections() {
//!     match line {
//!         ConnectionLine::Shared { a, b, shared_count } => {
//!             println!("{} -- {} ({shared_count} shared)", a.id, b.id);
//!         }
//!         ConnectionLine::Subset { from, to } => {
//!             println!("{} -> {}", from.id, to.id);
//!         }
//!     }
//! }
//! ```

pub mod config;

mod canvas;
mod error;
mod relation;

pub use constellation_core::{geometry, identifier, label};

pub use canvas::{Canvas, Diagram, LoadOutcome};
pub use error::ConstellationError;
pub use relation::visible::{ConnectionLine, ConnectionMode, Endpoint};
