//! The SPDX comparison profile.
//!
//! Collects the sentinel spellings, representation-local fields, and the
//! list-element identifier used when comparing SPDX 2.3 documents.

use std::collections::BTreeSet;

use veridoc_diff::{DiffConfig, NonePair};

/// Plain spelling of the "no assertion" sentinel.
pub const NO_ASSERTION: &str = "NOASSERTION";
/// URI spelling of the "no assertion" sentinel.
pub const NO_ASSERTION_URI: &str = "http://spdx.org/rdf/terms#noassertion";
/// Plain spelling of the "none" value.
pub const NONE: &str = "NONE";
/// URI spelling of the "none" value.
pub const NONE_URI: &str = "http://spdx.org/rdf/terms#none";
/// Field identifying elements across reordered lists.
pub const IDENTIFIER_FIELD: &str = "SPDXID";

/// The [`DiffConfig`] all registered scenarios are written against.
///
/// `referenceType` is skipped because its serialized form is local to the
/// producing tool and carries no document semantics.
pub fn spdx_diff_config() -> DiffConfig {
    DiffConfig {
        no_assertion_forms: vec![NO_ASSERTION.to_string(), NO_ASSERTION_URI.to_string()],
        none_pairs: vec![NonePair {
            uri: NONE_URI.to_string(),
            plain: NONE.to_string(),
        }],
        ignored_fields: BTreeSet::from(["referenceType".to_string()]),
        identifier_field: IDENTIFIER_FIELD.to_string(),
    }
}
