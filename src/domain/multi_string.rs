// SPDX-License-Identifier: MIT OR Apache-2.0

//! A value that is written as either a single string or a list of strings.

use crate::domain::document::DocumentNode;
use crate::domain::errors::{DecodeError, MultiStringError, Result};
use crate::ports::NodeCodec;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An ordered list of strings that encodes as a bare string when it holds a
/// single element.
///
/// The encoded shape depends on the number of elements:
///
/// | elements | encoded as |
/// |---|---|
/// | 0 | `""` |
/// | 1 | `"a"` |
/// | 2+ | `["a", "b"]` |
///
/// The empty string literal is the encoding of the empty list, so decoding
/// `""` yields an empty list.
///
/// # Examples
///
/// ```
/// use flexval::domain::MultiString;
///
/// let names: MultiString = serde_json::from_str(r#""ca.example.com""#).unwrap();
/// assert_eq!(names.first(), "ca.example.com");
///
/// let names: MultiString = serde_json::from_str(r#"["a", "b"]"#).unwrap();
/// assert_eq!(names.len(), 2);
/// assert_eq!(serde_json::to_string(&names).unwrap(), r#"["a","b"]"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MultiString(Vec<String>);

impl MultiString {
    /// Creates an empty `MultiString`.
    pub fn new() -> Self {
        MultiString(Vec::new())
    }

    /// Returns the first element, or `""` if there are none.
    ///
    /// An empty list and a blank first element both return `""`; use
    /// [`MultiString::is_empty`] or [`MultiString::has_empties`] to tell them
    /// apart.
    pub fn first(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }

    /// Returns true if the list is empty or any element is the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexval::domain::MultiString;
    ///
    /// assert!(MultiString::new().has_empties());
    /// assert!(MultiString::from(vec!["".to_string(), "b".to_string()]).has_empties());
    /// assert!(!MultiString::from(vec!["a".to_string(), "b".to_string()]).has_empties());
    /// ```
    pub fn has_empties(&self) -> bool {
        self.0.is_empty() || self.0.iter().any(String::is_empty)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Converts into the underlying vector.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for MultiString {
    fn from(values: Vec<String>) -> Self {
        MultiString(values)
    }
}

impl From<String> for MultiString {
    fn from(value: String) -> Self {
        MultiString(vec![value])
    }
}

impl From<&str> for MultiString {
    fn from(value: &str) -> Self {
        MultiString(vec![value.to_string()])
    }
}

impl From<MultiString> for Vec<String> {
    fn from(value: MultiString) -> Self {
        value.0
    }
}

impl<S: Into<String>> FromIterator<S> for MultiString {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        MultiString(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for MultiString {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiString {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl NodeCodec for MultiString {
    fn encode(&self) -> DocumentNode {
        match self.0.as_slice() {
            [] => DocumentNode::String(String::new()),
            [single] => DocumentNode::String(single.clone()),
            many => DocumentNode::Array(many.iter().cloned().map(DocumentNode::String).collect()),
        }
    }

    fn decode_node(&mut self, node: &DocumentNode) -> Result<()> {
        self.0 = match node {
            DocumentNode::String(s) if s.is_empty() => Vec::new(),
            DocumentNode::String(s) => vec![s.clone()],
            DocumentNode::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    DocumentNode::String(s) => Ok(s.clone()),
                    other => Err(MultiStringError::NonStringElement {
                        index,
                        found: other.kind(),
                    }),
                })
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| DecodeError::parse(node.to_string(), e))?,
            DocumentNode::Null => Vec::new(),
            other => {
                return Err(DecodeError::parse(
                    other.to_string(),
                    MultiStringError::UnexpectedKind(other.kind()),
                ))
            }
        };
        Ok(())
    }

    fn decode_absent(&mut self) -> Result<()> {
        self.0 = Vec::new();
        Ok(())
    }
}

impl Serialize for MultiString {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0.as_slice() {
            [] => serializer.serialize_str(""),
            [single] => serializer.serialize_str(single),
            many => serializer.collect_seq(many),
        }
    }
}

impl<'de> Deserialize<'de> for MultiString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = DocumentNode::deserialize(deserializer)?;
        let mut value = MultiString::new();
        value.decode_node(&node).map_err(de::Error::custom)?;
        Ok(value)
    }
}
