// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the value adapters.
//!
//! Decoding can fail in three ways: the document node has the wrong shape, the
//! node has the right shape but its text does not parse, or there is no target
//! to decode into. Encoding never fails.

use crate::domain::document::NodeKind;
use thiserror::Error;

/// The main error type for decode operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use flexval::domain::errors::DecodeError;
/// use flexval::domain::NodeKind;
///
/// let error = DecodeError::ShapeError {
///     expected: "string",
///     found: NodeKind::Number,
/// };
/// assert_eq!(error.to_string(), "expected string, found number");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The document node is not of the kind the target accepts.
    #[error("expected {expected}, found {found}")]
    ShapeError {
        /// The kind the target accepts
        expected: &'static str,
        /// The kind that was actually found
        found: NodeKind,
    },

    /// The node has an acceptable kind but its content does not parse.
    #[error("error parsing {raw:?}: {source}")]
    ParseError {
        /// The raw input that failed to parse
        raw: String,
        /// The proximate cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Decode was invoked without storage to populate.
    #[error("{type_name} target cannot be absent")]
    InvalidTargetError {
        /// Name of the target type
        type_name: &'static str,
    },
}

impl DecodeError {
    /// Creates a `ParseError` wrapping `source` for the given raw input.
    pub fn parse<E>(raw: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DecodeError::ParseError {
            raw: raw.into(),
            source: Box::new(source),
        }
    }

    /// Creates an `InvalidTargetError` naming the type `T`.
    pub fn invalid_target<T>() -> Self {
        let full = std::any::type_name::<T>();
        let type_name = full.rsplit("::").next().unwrap_or(full);
        DecodeError::InvalidTargetError { type_name }
    }

    /// Returns the raw input attached to a `ParseError`.
    pub fn raw(&self) -> Option<&str> {
        match self {
            DecodeError::ParseError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// Syntax errors raised by the duration grammar.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DurationSyntaxError {
    /// The input was empty or only a sign.
    #[error("empty duration")]
    Empty,

    /// The input is not a sequence of signed decimal numbers with units.
    #[error("invalid duration")]
    Invalid,

    /// A number was not followed by a unit.
    #[error("missing unit in duration")]
    MissingUnit,

    /// A number was followed by an unknown unit.
    #[error("unknown unit {unit:?} in duration")]
    UnknownUnit {
        /// The unit text as written
        unit: String,
    },

    /// The magnitude does not fit in a signed 64-bit nanosecond count.
    #[error("duration out of range")]
    Overflow,
}

/// Errors raised when a node cannot become a multi-string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MultiStringError {
    /// The node is neither a string nor an array.
    #[error("expected string or array of strings, found {0}")]
    UnexpectedKind(NodeKind),

    /// An array element is not a string.
    #[error("array element {index} is {found}, not a string")]
    NonStringElement {
        /// Position of the element
        index: usize,
        /// Kind of the element
        found: NodeKind,
    },
}

/// A specialized Result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MultiString;
    use std::error::Error as _;

    #[test]
    fn test_shape_error() {
        let error = DecodeError::ShapeError {
            expected: "string",
            found: NodeKind::Array,
        };
        assert_eq!(error.to_string(), "expected string, found array");
    }

    #[test]
    fn test_parse_error_keeps_raw_and_source() {
        let error = DecodeError::parse("bogus", DurationSyntaxError::Invalid);
        assert_eq!(error.raw(), Some("bogus"));
        assert_eq!(error.to_string(), "error parsing \"bogus\": invalid duration");
        let source = error.source().unwrap();
        assert_eq!(
            source.downcast_ref::<DurationSyntaxError>(),
            Some(&DurationSyntaxError::Invalid)
        );
    }

    #[test]
    fn test_invalid_target_error() {
        let error = DecodeError::invalid_target::<MultiString>();
        assert!(matches!(
            error,
            DecodeError::InvalidTargetError {
                type_name: "MultiString"
            }
        ));
        assert_eq!(error.to_string(), "MultiString target cannot be absent");
        assert_eq!(error.raw(), None);
    }

    #[test]
    fn test_unknown_unit_message() {
        let error = DurationSyntaxError::UnknownUnit {
            unit: "d".to_string(),
        };
        assert_eq!(error.to_string(), "unknown unit \"d\" in duration");
    }

    #[test]
    fn test_multi_string_error_messages() {
        let error = MultiStringError::NonStringElement {
            index: 1,
            found: NodeKind::Number,
        };
        assert_eq!(error.to_string(), "array element 1 is number, not a string");

        let error = MultiStringError::UnexpectedKind(NodeKind::Object);
        assert_eq!(
            error.to_string(),
            "expected string or array of strings, found object"
        );
    }
}
