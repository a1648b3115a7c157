//! Foundation types for veridoc.
//!
//! This crate provides the tree model consumed by the comparison engine.
//! Every other veridoc crate depends on `veridoc-types`.
//!
//! # Key Types
//!
//! - [`Node`] -- Tagged union over the shapes a document tree can take
//! - [`Scalar`] -- Leaf values (string, number, boolean)
//! - [`path`] -- Helpers for building `/`-delimited document paths

pub mod node;
pub mod path;

pub use node::{Node, Scalar};
pub use path::{child, child_index};
