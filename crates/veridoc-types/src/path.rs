//! Document path helpers.
//!
//! Paths are `/`-delimited strings rooted at the document root. The root
//! itself is the empty string, so the first component renders as
//! `/fieldName`. Array elements use their decimal index as component.

/// Append a field-name component to a path prefix.
pub fn child(prefix: &str, component: &str) -> String {
    format!("{prefix}/{component}")
}

/// Append an array-index component to a path prefix.
pub fn child_index(prefix: &str, index: usize) -> String {
    format!("{prefix}/{index}")
}
