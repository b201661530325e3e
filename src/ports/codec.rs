// SPDX-License-Identifier: MIT OR Apache-2.0

//! Node codec trait definition.
//!
//! This module defines the `NodeCodec` trait, the interface every value adapter
//! implements to move between its in-memory form and a document node.

use crate::domain::{DecodeError, DocumentNode, Result};

/// A value that can be encoded to and decoded from a document node.
///
/// Encoding is infallible. Decoding populates `self` in place and leaves it
/// untouched when an error is returned.
///
/// # Examples
///
/// ```rust
/// use flexval::domain::{DecodeError, DocumentNode, Result};
/// use flexval::ports::NodeCodec;
///
/// #[derive(Default)]
/// struct Flag(bool);
///
/// impl NodeCodec for Flag {
///     fn encode(&self) -> DocumentNode {
///         DocumentNode::Bool(self.0)
///     }
///
///     fn decode_node(&mut self, node: &DocumentNode) -> Result<()> {
///         match node {
///             DocumentNode::Bool(b) => {
///                 self.0 = *b;
///                 Ok(())
///             }
///             other => Err(DecodeError::ShapeError {
///                 expected: "bool",
///                 found: other.kind(),
///             }),
///         }
///     }
///
///     fn decode_absent(&mut self) -> Result<()> {
///         self.0 = false;
///         Ok(())
///     }
/// }
///
/// let mut flag = Flag::default();
/// flag.decode_node(&DocumentNode::Bool(true)).unwrap();
/// assert!(flag.0);
/// ```
pub trait NodeCodec {
    /// Encodes the value as its canonical document node.
    fn encode(&self) -> DocumentNode;

    /// Decodes a document node into `self`.
    ///
    /// # Errors
    ///
    /// * `DecodeError::ShapeError` - the node has a kind the value never accepts
    /// * `DecodeError::ParseError` - the node's content does not parse
    fn decode_node(&mut self, node: &DocumentNode) -> Result<()>;

    /// Handles zero-length input, where the document supplied no bytes at all.
    fn decode_absent(&mut self) -> Result<()>;
}

/// Decodes `node` into `target`.
///
/// Fails with `DecodeError::InvalidTargetError` when there is no target to
/// populate.
///
/// # Examples
///
/// ```rust
/// use flexval::domain::{DecodeError, DocumentNode, MultiString};
/// use flexval::ports::decode_into;
///
/// let node = DocumentNode::from("a");
/// let mut names = MultiString::new();
/// decode_into(Some(&mut names), &node).unwrap();
/// assert_eq!(names.first(), "a");
///
/// let result = decode_into::<MultiString>(None, &node);
/// assert!(matches!(result, Err(DecodeError::InvalidTargetError { .. })));
/// ```
pub fn decode_into<T: NodeCodec>(target: Option<&mut T>, node: &DocumentNode) -> Result<()> {
    let target = target.ok_or_else(DecodeError::invalid_target::<T>)?;
    target.decode_node(node)
}
