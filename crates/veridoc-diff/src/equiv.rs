//! Equivalence rules: scalar value equivalence and the absence predicate.
//!
//! These two predicates are the behavioral contract the rest of the engine
//! is built on. [`values_equivalent`] decides when two leaf values carry
//! the same meaning; [`is_equivalent_to_absent`] decides when a node,
//! despite being present, carries no meaning at all.

use veridoc_types::{Node, Scalar};

use crate::config::DiffConfig;

/// Normalize a string for comparison: `\r\n` becomes `\n` and surrounding
/// whitespace is trimmed.
pub fn normalize(s: &str) -> String {
    s.replace("\r\n", "\n").trim().to_string()
}

/// Returns `true` if two scalars are semantically equal.
///
/// Strings are normalized and their configured "none" URI form is mapped
/// to the plain form before comparison. Numbers and booleans compare
/// structurally. Scalars of different kinds are never equal.
///
/// Total over any two scalars; no failure modes.
pub fn values_equivalent(a: &Scalar, b: &Scalar, config: &DiffConfig) -> bool {
    match (a, b) {
        (Scalar::String(a), Scalar::String(b)) => {
            let a = normalize(a);
            let b = normalize(b);
            config.canonical_none(&a) == config.canonical_none(&b)
        }
        (Scalar::Number(a), Scalar::Number(b)) => a == b,
        (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
        _ => false,
    }
}

/// Returns `true` if the node carries no meaningful information: missing,
/// an empty object or array, or a string equal to one of the configured
/// no-assertion sentinels (in either spelling).
///
/// A one-sided field or element whose value satisfies this predicate is
/// not worth reporting.
pub fn is_equivalent_to_absent(node: &Node, config: &DiffConfig) -> bool {
    match node {
        Node::Missing => true,
        Node::Object(fields) => fields.is_empty(),
        Node::Array(items) => items.is_empty(),
        Node::Value(Scalar::String(s)) => config.is_no_assertion(&normalize(s)),
        Node::Value(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> DiffConfig {
        DiffConfig {
            no_assertion_forms: vec![
                "NOASSERTION".into(),
                "http://example.org/terms#noassertion".into(),
            ],
            none_pairs: vec![crate::config::NonePair {
                uri: "http://example.org/terms#none".into(),
                plain: "NONE".into(),
            }],
            ..DiffConfig::default()
        }
    }

    fn scalar(value: serde_json::Value) -> Scalar {
        match Node::from(value) {
            Node::Value(s) => s,
            other => panic!("not a scalar: {other:?}"),
        }
    }

    #[test]
    fn normalize_crlf_and_trim() {
        assert_eq!(normalize(" X\r\n "), "X");
        assert_eq!(normalize("a\r\nb"), "a\nb");
        assert_eq!(normalize("plain"), "plain");
    }

    #[test]
    fn equal_strings_after_normalization() {
        let config = config();
        assert!(values_equivalent(
            &scalar(json!(" X\r\n ")),
            &scalar(json!("X\n")),
            &config
        ));
    }

    #[test]
    fn none_forms_are_cross_equivalent() {
        let config = config();
        assert!(values_equivalent(
            &scalar(json!("http://example.org/terms#none")),
            &scalar(json!("NONE")),
            &config
        ));
    }

    #[test]
    fn distinct_strings_differ() {
        let config = config();
        assert!(!values_equivalent(&scalar(json!("foo")), &scalar(json!("bar")), &config));
    }

    #[test]
    fn numbers_compare_structurally() {
        let config = config();
        assert!(values_equivalent(&scalar(json!(3)), &scalar(json!(3)), &config));
        assert!(!values_equivalent(&scalar(json!(3)), &scalar(json!(4)), &config));
    }

    #[test]
    fn cross_kind_scalars_differ() {
        let config = config();
        assert!(!values_equivalent(&scalar(json!("1")), &scalar(json!(1)), &config));
        assert!(!values_equivalent(&scalar(json!(true)), &scalar(json!("true")), &config));
    }

    #[test]
    fn missing_is_absent() {
        assert!(is_equivalent_to_absent(&Node::Missing, &config()));
    }

    #[test]
    fn empty_collections_are_absent() {
        let config = config();
        assert!(is_equivalent_to_absent(&Node::from(json!([])), &config));
        assert!(is_equivalent_to_absent(&Node::from(json!({})), &config));
        assert!(!is_equivalent_to_absent(&Node::from(json!([1])), &config));
        assert!(!is_equivalent_to_absent(&Node::from(json!({"a": 1})), &config));
    }

    #[test]
    fn no_assertion_sentinels_are_absent_in_both_forms() {
        let config = config();
        assert!(is_equivalent_to_absent(&Node::from(json!("NOASSERTION")), &config));
        assert!(is_equivalent_to_absent(
            &Node::from(json!("http://example.org/terms#noassertion")),
            &config
        ));
        assert!(is_equivalent_to_absent(&Node::from(json!(" NOASSERTION \r\n")), &config));
    }

    #[test]
    fn none_is_not_absent() {
        let config = config();
        assert!(!is_equivalent_to_absent(&Node::from(json!("NONE")), &config));
        assert!(!is_equivalent_to_absent(
            &Node::from(json!("http://example.org/terms#none")),
            &config
        ));
    }

    #[test]
    fn ordinary_values_are_not_absent() {
        let config = config();
        assert!(!is_equivalent_to_absent(&Node::from(json!("text")), &config));
        assert!(!is_equivalent_to_absent(&Node::from(json!(0)), &config));
        assert!(!is_equivalent_to_absent(&Node::from(json!(false)), &config));
    }
}
