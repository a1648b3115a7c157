//! The document tree model.
//!
//! A [`Node`] is the already-parsed form of a structured document as
//! produced by an external serializer. The comparison engine only ever
//! borrows nodes; it never mutates or takes ownership of them.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, Serializer};
use serde_json::Value;

/// A single node in a document tree.
///
/// JSON `null` has no variant of its own: it is folded into [`Node::Missing`]
/// on conversion, since the engine treats an explicit null and an absent
/// field identically.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A mapping from field names to child nodes. Insertion order is not
    /// semantically significant; the map is kept sorted by field name.
    Object(BTreeMap<String, Node>),
    /// An ordered sequence of child nodes.
    Array(Vec<Node>),
    /// A leaf value.
    Value(Scalar),
    /// An absent node (missing field or explicit null).
    Missing,
}

/// A leaf value carried by a [`Node::Value`].
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Node {
    /// An empty object node.
    pub fn empty_object() -> Self {
        Node::Object(BTreeMap::new())
    }

    /// An empty array node.
    pub fn empty_array() -> Self {
        Node::Array(Vec::new())
    }

    /// A string value node.
    pub fn string(s: impl Into<String>) -> Self {
        Node::Value(Scalar::String(s.into()))
    }

    /// Returns `true` for [`Node::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Node::Missing)
    }

    /// The field map, if this is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// The element list, if this is an array.
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The scalar, if this is a value node.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Value(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// The string content, if this is a string value node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Value(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a field on an object node. Returns `None` for non-objects
    /// and for absent fields.
    pub fn get(&self, field: &str) -> Option<&Node> {
        self.as_object().and_then(|fields| fields.get(field))
    }

    /// Convert back into a `serde_json::Value` ([`Node::Missing`] becomes
    /// `null`). Used when rendering differences for reports.
    pub fn to_json(&self) -> Value {
        match self {
            Node::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, node)| (name.clone(), node.to_json()))
                    .collect(),
            ),
            Node::Array(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            Node::Value(Scalar::String(s)) => Value::String(s.clone()),
            Node::Value(Scalar::Number(n)) => Value::Number(n.clone()),
            Node::Value(Scalar::Bool(b)) => Value::Bool(*b),
            Node::Missing => Value::Null,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Missing,
            Value::Bool(b) => Node::Value(Scalar::Bool(b)),
            Value::Number(n) => Node::Value(Scalar::Number(n)),
            Value::String(s) => Node::Value(Scalar::String(s)),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(fields) => Node::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        node.to_json()
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Object(fields) => fields.serialize(serializer),
            Node::Array(items) => items.serialize(serializer),
            Node::Value(Scalar::String(s)) => serializer.serialize_str(s),
            Node::Value(Scalar::Number(n)) => n.serialize(serializer),
            Node::Value(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Node::Missing => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
