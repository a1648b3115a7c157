//! Field-wise comparison of two object nodes.

use std::collections::BTreeMap;

use veridoc_types::{path, Node};

use crate::config::DiffConfig;
use crate::equiv::is_equivalent_to_absent;
use crate::record::Difference;
use crate::tree::diff_nodes;

/// Compare two objects field by field.
///
/// Fields present on both sides are diffed recursively; fields exclusive
/// to one side become one-sided records unless their value is equivalent
/// to absence. Configured ignored fields are neither compared nor
/// reported. Emission order is stable: common fields (in sorted field
/// order), then actual-exclusive, then expected-exclusive.
pub fn diff_objects(
    actual: &BTreeMap<String, Node>,
    expected: &BTreeMap<String, Node>,
    prefix: &str,
    secondary_prefix: Option<&str>,
    config: &DiffConfig,
) -> Vec<Difference> {
    let mut differences = Vec::new();

    for (name, actual_value) in actual {
        if config.ignored_fields.contains(name) {
            continue;
        }
        if let Some(expected_value) = expected.get(name) {
            let field_path = path::child(prefix, name);
            let field_secondary = secondary_prefix.map(|p| path::child(p, name));
            differences.extend(diff_nodes(
                actual_value,
                expected_value,
                &field_path,
                field_secondary.as_deref(),
                config,
            ));
        }
    }

    for (name, value) in actual {
        if config.ignored_fields.contains(name) || expected.contains_key(name) {
            continue;
        }
        if is_equivalent_to_absent(value, config) {
            continue;
        }
        let field_path = path::child(prefix, name);
        let field_secondary = secondary_prefix.map(|p| path::child(p, name));
        differences.push(Difference::actual_only(
            value,
            field_path,
            field_secondary.as_deref(),
        ));
    }

    for (name, value) in expected {
        if config.ignored_fields.contains(name) || actual.contains_key(name) {
            continue;
        }
        if is_equivalent_to_absent(value, config) {
            continue;
        }
        let field_path = path::child(prefix, name);
        let field_secondary = secondary_prefix.map(|p| path::child(p, name));
        differences.push(Difference::expected_only(
            value,
            field_path,
            field_secondary.as_deref(),
        ));
    }

    differences
}
