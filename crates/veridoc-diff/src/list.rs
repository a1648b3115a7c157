//! Order-tolerant comparison of two array nodes.
//!
//! Lists represent unordered collections in the domain, so index-for-index
//! comparison would falsely report differences on mere reordering. The
//! matcher works in two phases: exact structural matches are paired off
//! first, then leftover elements are correlated through a designated
//! identifier field so a genuine difference inside an element can be
//! located on both sides.

use veridoc_types::{path, Node};

use crate::config::DiffConfig;
use crate::equiv::is_equivalent_to_absent;
use crate::record::Difference;
use crate::tree::diff_nodes;

const NO_MATCH_IN_EXPECTED: &str =
    "no element in expected list with a matching identifier, or no identifier present";
const MULTIPLE_MATCHES_IN_EXPECTED: &str =
    "multiple elements in expected list share the identifier";
const NO_MATCH_IN_ACTUAL: &str =
    "no element in actual list with a matching identifier, or no identifier present";
const MULTIPLE_MATCHES_IN_ACTUAL: &str = "multiple elements in actual list share the identifier";

/// A relevant list element, keeping its index in the original array for
/// path construction.
type Element<'a> = (usize, &'a Node);

/// Compare two arrays, tolerating reordering.
///
/// Elements equivalent to absence are dropped from both sides first.
/// Each actual element is paired with an exact structural match if one
/// remains; otherwise the matcher looks for a unique identifier match to
/// diff against, reporting the element as unmatched when zero or several
/// candidates share its identifier. Expected elements left over after
/// that are handled symmetrically.
pub fn diff_arrays(
    actual: &[Node],
    expected: &[Node],
    prefix: &str,
    secondary_prefix: Option<&str>,
    config: &DiffConfig,
) -> Vec<Difference> {
    let actual_elements: Vec<Element> = relevant_elements(actual, config);
    let expected_elements: Vec<Element> = relevant_elements(expected, config);

    let mut remaining_actual = actual_elements.clone();
    let mut remaining_expected = expected_elements.clone();

    // Paths of expected-side elements are rooted at the expected list,
    // which only differs from `prefix` when a reordering higher up already
    // introduced a secondary path.
    let expected_list_path = secondary_prefix.unwrap_or(prefix);

    let mut differences = Vec::new();

    for &(actual_index, actual_element) in &actual_elements {
        let exact = remaining_expected
            .iter()
            .position(|&(_, candidate)| {
                diff_nodes(actual_element, candidate, "", None, config).is_empty()
            });
        if let Some(position) = exact {
            remaining_expected.remove(position);
            remove_by_index(&mut remaining_actual, actual_index);
            continue;
        }

        let element_path = path::child_index(prefix, actual_index);

        // Backup plan: correlate by identifier and compare in place.
        let id_matches = identifier_matches(&remaining_expected, actual_element, config);
        match id_matches[..] {
            [(expected_index, expected_element)] => {
                let expected_element_path = path::child_index(expected_list_path, expected_index);
                remove_by_index(&mut remaining_actual, actual_index);
                remove_by_index(&mut remaining_expected, expected_index);
                differences.extend(diff_nodes(
                    actual_element,
                    expected_element,
                    &element_path,
                    Some(&expected_element_path),
                    config,
                ));
            }
            [] => {
                differences.push(
                    Difference::actual_only(actual_element, element_path, Some(expected_list_path))
                        .with_comment(NO_MATCH_IN_EXPECTED),
                );
            }
            _ => {
                differences.push(
                    Difference::actual_only(actual_element, element_path, Some(expected_list_path))
                        .with_comment(MULTIPLE_MATCHES_IN_EXPECTED),
                );
            }
        }
    }

    // Surface elements present only in the expected list. An exact match
    // cannot exist here, it would have been consumed above.
    let leftover_expected = remaining_expected.clone();
    for &(expected_index, expected_element) in &leftover_expected {
        let expected_element_path = path::child_index(expected_list_path, expected_index);

        let id_matches = identifier_matches(&remaining_actual, expected_element, config);
        match id_matches[..] {
            [(actual_index, actual_element)] => {
                let actual_element_path = path::child_index(prefix, actual_index);
                remove_by_index(&mut remaining_actual, actual_index);
                remove_by_index(&mut remaining_expected, expected_index);
                differences.extend(diff_nodes(
                    actual_element,
                    expected_element,
                    &actual_element_path,
                    Some(&expected_element_path),
                    config,
                ));
            }
            [] => {
                differences.push(
                    Difference::expected_only(expected_element, prefix, Some(&expected_element_path))
                        .with_comment(NO_MATCH_IN_ACTUAL),
                );
            }
            _ => {
                differences.push(
                    Difference::expected_only(expected_element, prefix, Some(&expected_element_path))
                        .with_comment(MULTIPLE_MATCHES_IN_ACTUAL),
                );
            }
        }
    }

    differences
}

fn relevant_elements<'a>(items: &'a [Node], config: &DiffConfig) -> Vec<Element<'a>> {
    items
        .iter()
        .enumerate()
        .filter(|(_, node)| !is_equivalent_to_absent(node, config))
        .collect()
}

/// Elements of `candidates` that carry the identifier field with the same
/// value as `target`. Elements without the identifier field never match,
/// so a target without one yields no candidates.
fn identifier_matches<'a>(
    candidates: &[Element<'a>],
    target: &Node,
    config: &DiffConfig,
) -> Vec<Element<'a>> {
    let Some(target_id) = target.get(&config.identifier_field) else {
        return Vec::new();
    };
    candidates
        .iter()
        .filter(|(_, candidate)| candidate.get(&config.identifier_field) == Some(target_id))
        .copied()
        .collect()
}

fn remove_by_index(elements: &mut Vec<Element<'_>>, original_index: usize) {
    if let Some(position) = elements.iter().position(|&(i, _)| i == original_index) {
        elements.remove(position);
    }
}
