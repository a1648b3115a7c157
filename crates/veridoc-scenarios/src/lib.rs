//! Conformance scenario registry for veridoc.
//!
//! A scenario pairs a name with a factory for the reference document a
//! candidate document must be semantically equivalent to. Scenarios are
//! registered in a static table rather than discovered at runtime; see
//! [`registry`].
//!
//! # Key Types
//!
//! - [`Scenario`] / [`Category`] -- Registry entries and their grouping
//! - [`registry::select`] -- Resolve names/categories into scenarios
//! - [`profile::spdx_diff_config`] -- The comparison profile the
//!   scenarios are written against

pub mod error;
pub mod generation;
pub mod profile;
pub mod registry;

pub use error::ScenarioError;
pub use profile::spdx_diff_config;
pub use registry::{all, by_category, find, select, Category, Scenario};
