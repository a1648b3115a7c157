//! Error types for scenario selection.

use thiserror::Error;

/// Errors produced when resolving scenario names and categories.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    /// No scenario is registered under the given name.
    #[error("unknown scenario: {name}\nknown scenarios are: {known}")]
    UnknownScenario { name: String, known: String },

    /// No category with the given name exists.
    #[error("unknown scenario category: {name}\nknown categories are: {known}")]
    UnknownCategory { name: String, known: String },

    /// Neither names nor categories were provided.
    #[error("must provide either scenario names or categories or both")]
    EmptySelection,
}
