// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document format trait definition.
//!
//! This module defines the `DocumentFormat` trait, which turns the raw text of
//! a single field into a [`DocumentNode`] and renders nodes back to text.

use crate::domain::{DocumentNode, Result};

/// A textual document format such as JSON or YAML.
///
/// # Zero-length input
///
/// Text with no bytes at all is not a parse error: `parse` returns `Ok(None)`
/// so the caller can decide what an absent value means for its target.
///
/// # Examples
///
/// ```rust
/// use flexval::domain::{DocumentNode, Result};
/// use flexval::ports::DocumentFormat;
///
/// struct PlainText;
///
/// impl DocumentFormat for PlainText {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["txt"]
///     }
///
///     fn parse(&self, text: &str) -> Result<Option<DocumentNode>> {
///         if text.is_empty() {
///             return Ok(None);
///         }
///         Ok(Some(DocumentNode::from(text)))
///     }
///
///     fn render(&self, node: &DocumentNode) -> String {
///         node.as_str().map(str::to_string).unwrap_or_else(|| node.to_string())
///     }
/// }
///
/// let format = PlainText;
/// assert_eq!(format.parse("").unwrap(), None);
/// assert_eq!(format.parse("5s").unwrap(), Some(DocumentNode::from("5s")));
/// ```
pub trait DocumentFormat: Send + Sync {
    /// Returns a short name for this format, used in logs.
    fn name(&self) -> &str;

    /// Returns the file extensions (without the leading dot) of this format.
    fn supported_extensions(&self) -> &[&str];

    /// Parses raw text into a node.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - the text is zero-length
    /// * `Ok(Some(node))` - the parsed node
    /// * `Err(DecodeError::ParseError)` - the text is malformed; `raw` holds the text
    fn parse(&self, text: &str) -> Result<Option<DocumentNode>>;

    /// Renders a node as text in this format.
    fn render(&self, node: &DocumentNode) -> String;
}
