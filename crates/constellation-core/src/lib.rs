//! Constellation Core Types and Definitions
//!
//! This crate provides the foundational types for the Constellation canvas
//! engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Position and size primitives for diagram placement ([`geometry`] module)
//! - **Labels**: De-duplicated, insertion-ordered label sets ([`label::LabelSet`])

pub mod geometry;
pub mod identifier;
pub mod label;
