//! The difference record: one located, explained discrepancy.

use std::fmt;

use serde::Serialize;
use veridoc_types::Node;

/// One discrepancy between the actual and expected trees.
///
/// `path` locates the discrepancy within the actual document.
/// `secondary_path` is set only when the location within the expected
/// document differs, which happens for matched list elements whose index
/// differs between the two documents (list order is not semantically
/// significant).
///
/// At least one of `actual_value`/`expected_value` is always present:
/// both for a genuine value mismatch, one for a one-sided field or
/// element. The constructors uphold this.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Difference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<Node>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Difference {
    /// A genuine mismatch with both sides attached.
    pub fn between(
        actual: &Node,
        expected: &Node,
        path: impl Into<String>,
        secondary_path: Option<&str>,
    ) -> Self {
        Self {
            actual_value: Some(actual.clone()),
            expected_value: Some(expected.clone()),
            path: path.into(),
            secondary_path: secondary_path.map(str::to_string),
            comment: None,
        }
    }

    /// A one-sided record for a value present only in the actual document.
    pub fn actual_only(
        actual: &Node,
        path: impl Into<String>,
        secondary_path: Option<&str>,
    ) -> Self {
        Self {
            actual_value: Some(actual.clone()),
            expected_value: None,
            path: path.into(),
            secondary_path: secondary_path.map(str::to_string),
            comment: None,
        }
    }

    /// A one-sided record for a value present only in the expected document.
    pub fn expected_only(
        expected: &Node,
        path: impl Into<String>,
        secondary_path: Option<&str>,
    ) -> Self {
        Self {
            actual_value: None,
            expected_value: Some(expected.clone()),
            path: path.into(),
            secondary_path: secondary_path.map(str::to_string),
            comment: None,
        }
    }

    /// Attach an explanatory comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.actual_value, &self.expected_value) {
            (Some(actual), Some(expected)) => {
                write!(f, "{}: actual {}, expected {}", self.path, actual, expected)?;
            }
            (Some(actual), None) => {
                write!(f, "{}: only in actual: {}", self.path, actual)?;
            }
            (None, Some(expected)) => {
                write!(f, "{}: only in expected: {}", self.path, expected)?;
            }
            (None, None) => {
                write!(f, "{}: (no values attached)", self.path)?;
            }
        }
        if let Some(secondary) = &self.secondary_path {
            write!(f, " [expected at {}]", secondary)?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " ({})", comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_and_omits_absent_fields() {
        let difference = Difference::between(
            &Node::from(json!("foo")),
            &Node::from(json!("bar")),
            "/name",
            None,
        );
        let rendered = serde_json::to_value(&difference).unwrap();
        assert_eq!(
            rendered,
            json!({"actualValue": "foo", "expectedValue": "bar", "path": "/name"})
        );
    }

    #[test]
    fn serializes_secondary_path_and_comment_when_set() {
        let difference = Difference::actual_only(&Node::from(json!({"a": 1})), "/items/0", Some("/items"))
            .with_comment("no match");
        let rendered = serde_json::to_value(&difference).unwrap();
        assert_eq!(
            rendered,
            json!({
                "actualValue": {"a": 1},
                "path": "/items/0",
                "secondaryPath": "/items",
                "comment": "no match"
            })
        );
    }

    #[test]
    fn display_mismatch() {
        let difference = Difference::between(
            &Node::from(json!("foo")),
            &Node::from(json!("bar")),
            "/name",
            None,
        );
        assert_eq!(difference.to_string(), "/name: actual \"foo\", expected \"bar\"");
    }

    #[test]
    fn display_one_sided_with_secondary_path() {
        let difference = Difference::expected_only(&Node::from(json!("x")), "/items", Some("/items/2"))
            .with_comment("nothing matched");
        assert_eq!(
            difference.to_string(),
            "/items: only in expected: \"x\" [expected at /items/2] (nothing matched)"
        );
    }
}
