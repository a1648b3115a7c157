//! Recursive dispatch over two nodes of matching or differing shape.

use veridoc_types::Node;

use crate::config::DiffConfig;
use crate::equiv::{is_equivalent_to_absent, values_equivalent};
use crate::list::diff_arrays;
use crate::object::diff_objects;
use crate::record::Difference;

/// Compare two document trees from the root.
///
/// Two object roots go straight to field-wise comparison: the
/// equivalent-to-absent shortcut in [`diff_nodes`] applies to nested
/// nodes only, so an empty document still participates in comparison
/// rather than swallowing the other side whole. Non-object roots fall
/// back to [`diff_nodes`] with an empty path prefix. Returns the full
/// ordered list of differences; an empty list means the documents are
/// semantically equivalent.
pub fn diff_documents(actual: &Node, expected: &Node, config: &DiffConfig) -> Vec<Difference> {
    match (actual, expected) {
        (Node::Object(a), Node::Object(b)) => diff_objects(a, b, "", None, config),
        _ => diff_nodes(actual, expected, "", None, config),
    }
}

/// Compare two nodes at the given path.
///
/// Dispatch order:
/// 1. both equivalent-to-absent: no difference;
/// 2. exactly one equivalent-to-absent: one record carrying the present
///    side;
/// 3. both values: scalar equivalence;
/// 4. both objects: field-wise comparison;
/// 5. both arrays: order-tolerant element matching;
/// 6. anything else is a shape mismatch, reported without further
///    recursion.
pub fn diff_nodes(
    actual: &Node,
    expected: &Node,
    path: &str,
    secondary_path: Option<&str>,
    config: &DiffConfig,
) -> Vec<Difference> {
    let actual_absent = is_equivalent_to_absent(actual, config);
    let expected_absent = is_equivalent_to_absent(expected, config);

    if actual_absent && expected_absent {
        return Vec::new();
    }
    if actual_absent {
        return vec![Difference::expected_only(expected, path, secondary_path)];
    }
    if expected_absent {
        return vec![Difference::actual_only(actual, path, secondary_path)];
    }

    match (actual, expected) {
        (Node::Value(a), Node::Value(b)) => {
            if values_equivalent(a, b, config) {
                Vec::new()
            } else {
                vec![Difference::between(actual, expected, path, secondary_path)]
            }
        }
        (Node::Object(a), Node::Object(b)) => diff_objects(a, b, path, secondary_path, config),
        (Node::Array(a), Node::Array(b)) => diff_arrays(a, b, path, secondary_path, config),
        _ => vec![Difference::between(actual, expected, path, secondary_path)],
    }
}
