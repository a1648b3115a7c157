//! Semantic tree-diff engine for veridoc.
//!
//! Compares two already-materialized document trees and produces an ordered
//! list of located, explained differences, tolerating differences that do
//! not change meaning: field absence vs. an explicit "no value" sentinel,
//! empty vs. absent collections, and reordering of list elements.
//!
//! # Key Types
//!
//! - [`DiffConfig`] -- Sentinel forms, ignored fields, identifier field
//! - [`Difference`] -- One located discrepancy, with dual-path support for
//!   reordered list elements
//! - [`diff_documents`] / [`diff_nodes`] -- Entry points of the recursive
//!   comparison
//!
//! The engine is pure and total: any discrepancy, including a shape
//! mismatch, is represented as a [`Difference`] rather than an error.
//! Inputs are assumed to be finite trees; recursion depth is bounded by
//! the nesting depth of the documents, so callers comparing untrusted
//! input should impose their own depth or node-count guard.

pub mod config;
pub mod equiv;
pub mod list;
pub mod object;
pub mod record;
pub mod tree;

pub use config::{DiffConfig, NonePair};
pub use equiv::{is_equivalent_to_absent, normalize, values_equivalent};
pub use list::diff_arrays;
pub use object::diff_objects;
pub use record::Difference;
pub use tree::{diff_documents, diff_nodes};
