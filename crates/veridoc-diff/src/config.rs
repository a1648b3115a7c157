//! Comparison configuration.
//!
//! The engine itself is domain-agnostic; everything domain-specific (which
//! strings mean "no assertion", which fields are representation-local,
//! which field identifies list elements) is supplied by the caller through
//! [`DiffConfig`]. The struct deserializes from TOML or JSON so a profile
//! can live in a config file.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A pair of spellings of the same domain "none" concept.
///
/// The two forms are treated as equal when compared cross-form. Unlike the
/// no-assertion sentinels, a "none" value is meaningful and is not
/// equivalent to absence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonePair {
    /// The URI spelling, e.g. `http://spdx.org/rdf/terms#none`.
    pub uri: String,
    /// The plain spelling, e.g. `NONE`. Used as the canonical form.
    pub plain: String,
}

/// Configuration surface of the diff engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// String forms treated as equivalent to an absent node, and therefore
    /// cross-equivalent to each other. Matched against normalized strings.
    pub no_assertion_forms: Vec<String>,
    /// "None" spellings that compare equal across their URI and plain form.
    pub none_pairs: Vec<NonePair>,
    /// Object fields skipped entirely during comparison.
    pub ignored_fields: BTreeSet<String>,
    /// Field used to correlate list elements across differently-ordered
    /// lists when no exact structural match exists.
    pub identifier_field: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            no_assertion_forms: Vec::new(),
            none_pairs: Vec::new(),
            ignored_fields: BTreeSet::new(),
            identifier_field: "id".to_string(),
        }
    }
}

impl DiffConfig {
    /// Returns `true` if the (already normalized) string is one of the
    /// configured no-assertion sentinels.
    pub fn is_no_assertion(&self, normalized: &str) -> bool {
        self.no_assertion_forms.iter().any(|form| form == normalized)
    }

    /// Map the URI form of a configured "none" value to its plain form.
    /// Strings that are not a configured URI form pass through unchanged.
    pub fn canonical_none<'a>(&'a self, normalized: &'a str) -> &'a str {
        for pair in &self.none_pairs {
            if pair.uri == normalized {
                return &pair.plain;
            }
        }
        normalized
    }
}
