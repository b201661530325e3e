// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic document nodes.
//!
//! A `DocumentNode` is the decoded, format-independent form of one value in a
//! configuration document. Codecs inspect the node's variant and never look at
//! raw bytes.

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The kind of a [`DocumentNode`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// Any numeric literal
    Number,
    /// A string literal
    String,
    /// An array
    Array,
    /// An object or mapping
    Object,
}

impl NodeKind {
    /// Returns the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single node of a decoded configuration document.
///
/// Object entries keep the order in which they were produced by the source
/// format.
///
/// # Examples
///
/// ```
/// use flexval::domain::{DocumentNode, NodeKind};
///
/// let node = DocumentNode::from(serde_json::json!(["a", "b"]));
/// assert_eq!(node.kind(), NodeKind::Array);
/// assert_eq!(node.to_string(), r#"["a","b"]"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentNode {
    /// `null`
    Null,
    /// A boolean
    Bool(bool),
    /// A finite number
    Number(serde_json::Number),
    /// A NaN or infinite number, which JSON cannot represent
    NonFinite(f64),
    /// A string
    String(String),
    /// An array of nodes
    Array(Vec<DocumentNode>),
    /// An object as ordered key/value entries
    Object(Vec<(String, DocumentNode)>),
}

impl DocumentNode {
    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            DocumentNode::Null => NodeKind::Null,
            DocumentNode::Bool(_) => NodeKind::Bool,
            DocumentNode::Number(_) | DocumentNode::NonFinite(_) => NodeKind::Number,
            DocumentNode::String(_) => NodeKind::String,
            DocumentNode::Array(_) => NodeKind::Array,
            DocumentNode::Object(_) => NodeKind::Object,
        }
    }

    /// Returns the string content if this is a string node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocumentNode::String(s) => Some(s),
            _ => None,
        }
    }

    /// Creates a number node, keeping NaN and infinities as [`DocumentNode::NonFinite`].
    pub fn from_f64(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map_or(DocumentNode::NonFinite(value), DocumentNode::Number)
    }

    /// Converts a node used as a mapping key into key text.
    ///
    /// String keys are kept as is; other keys are rendered as compact JSON.
    fn into_key(self) -> String {
        match self {
            DocumentNode::String(s) => s,
            other => other.to_string(),
        }
    }

    /// Returns true if this is a `null` node.
    pub fn is_null(&self) -> bool {
        matches!(self, DocumentNode::Null)
    }
}

impl From<serde_json::Value> for DocumentNode {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => DocumentNode::Null,
            Value::Bool(b) => DocumentNode::Bool(b),
            Value::Number(n) => DocumentNode::Number(n),
            Value::String(s) => DocumentNode::String(s),
            Value::Array(items) => {
                DocumentNode::Array(items.into_iter().map(DocumentNode::from).collect())
            }
            Value::Object(map) => DocumentNode::Object(
                map.into_iter()
                    .map(|(k, v)| (k, DocumentNode::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<DocumentNode> for serde_json::Value {
    fn from(node: DocumentNode) -> Self {
        use serde_json::Value;
        match node {
            DocumentNode::Null => Value::Null,
            DocumentNode::Bool(b) => Value::Bool(b),
            DocumentNode::Number(n) => Value::Number(n),
            // JSON has no NaN or infinity
            DocumentNode::NonFinite(_) => Value::Null,
            DocumentNode::String(s) => Value::String(s),
            DocumentNode::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            DocumentNode::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Value> for DocumentNode {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;
        match value {
            Value::Null => DocumentNode::Null,
            Value::Bool(b) => DocumentNode::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DocumentNode::Number(i.into())
                } else if let Some(u) = n.as_u64() {
                    DocumentNode::Number(u.into())
                } else {
                    DocumentNode::from_f64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => DocumentNode::String(s),
            Value::Sequence(seq) => {
                DocumentNode::Array(seq.into_iter().map(DocumentNode::from).collect())
            }
            Value::Mapping(map) => DocumentNode::Object(
                map.into_iter()
                    .map(|(k, v)| (DocumentNode::from(k).into_key(), DocumentNode::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => DocumentNode::from(tagged.value),
        }
    }
}

impl From<&str> for DocumentNode {
    fn from(s: &str) -> Self {
        DocumentNode::String(s.to_string())
    }
}

impl From<String> for DocumentNode {
    fn from(s: String) -> Self {
        DocumentNode::String(s)
    }
}

impl From<Vec<DocumentNode>> for DocumentNode {
    fn from(items: Vec<DocumentNode>) -> Self {
        DocumentNode::Array(items)
    }
}

impl Serialize for DocumentNode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DocumentNode::Null => serializer.serialize_unit(),
            DocumentNode::Bool(b) => serializer.serialize_bool(*b),
            DocumentNode::Number(n) => n.serialize(serializer),
            DocumentNode::NonFinite(v) => serializer.serialize_f64(*v),
            DocumentNode::String(s) => serializer.serialize_str(s),
            DocumentNode::Array(items) => serializer.collect_seq(items),
            DocumentNode::Object(entries) => {
                serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
            }
        }
    }
}

impl<'de> Deserialize<'de> for DocumentNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

/// Builds a [`DocumentNode`] from any self-describing format.
struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = DocumentNode;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any document value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<DocumentNode, E> {
        Ok(DocumentNode::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<DocumentNode, E> {
        Ok(DocumentNode::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<DocumentNode, E> {
        Ok(DocumentNode::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<DocumentNode, E> {
        Ok(DocumentNode::from_f64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<DocumentNode, E> {
        Ok(DocumentNode::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<DocumentNode, E> {
        Ok(DocumentNode::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<DocumentNode, E> {
        Ok(DocumentNode::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<DocumentNode, E> {
        Ok(DocumentNode::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<DocumentNode, D::Error>
    where
        D: Deserializer<'de>,
    {
        DocumentNode::deserialize(deserializer)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> std::result::Result<DocumentNode, D::Error>
    where
        D: Deserializer<'de>,
    {
        DocumentNode::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<DocumentNode, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<DocumentNode>()? {
            items.push(item);
        }
        Ok(DocumentNode::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<DocumentNode, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<DocumentNode, DocumentNode>()? {
            entries.push((key.into_key(), value));
        }
        Ok(DocumentNode::Object(entries))
    }
}

fn write_json(f: &mut fmt::Formatter<'_>, value: &impl Serialize) -> fmt::Result {
    let text = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&text)
}

/// Renders the node as compact JSON. NaN and infinities, which JSON lacks,
/// are written as `NaN`, `inf` and `-inf`.
impl fmt::Display for DocumentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentNode::NonFinite(v) => write!(f, "{}", v),
            DocumentNode::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            DocumentNode::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_json(f, key)?;
                    write!(f, ":{}", value)?;
                }
                f.write_str("}")
            }
            scalar => write_json(f, scalar),
        }
    }
}
