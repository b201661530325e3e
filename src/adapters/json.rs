// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document format adapter.

use crate::domain::{DecodeError, DocumentNode, Result};
use crate::ports::DocumentFormat;

/// JSON format backed by `serde_json`.
///
/// # Examples
///
/// ```rust
/// use flexval::adapters::JsonFormat;
/// use flexval::domain::DocumentNode;
/// use flexval::ports::DocumentFormat;
///
/// let format = JsonFormat::new();
/// let node = format.parse(r#"["a", "b"]"#).unwrap().unwrap();
/// assert_eq!(format.render(&node), r#"["a","b"]"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl JsonFormat {
    /// Creates a new JSON format.
    pub fn new() -> Self {
        JsonFormat
    }
}

impl DocumentFormat for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn parse(&self, text: &str) -> Result<Option<DocumentNode>> {
        if text.is_empty() {
            return Ok(None);
        }
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| DecodeError::parse(text, e))?;
        Ok(Some(DocumentNode::from(value)))
    }

    fn render(&self, node: &DocumentNode) -> String {
        node.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_values() {
        let format = JsonFormat::new();
        assert_eq!(
            format.parse(r#""300ms""#).unwrap(),
            Some(DocumentNode::from("300ms"))
        );
        assert_eq!(
            format.parse(" [\"a\", 5] ").unwrap(),
            Some(DocumentNode::from(json!(["a", 5])))
        );
        assert_eq!(format.parse("null").unwrap(), Some(DocumentNode::Null));
    }

    #[test]
    fn test_parse_zero_length() {
        assert_eq!(JsonFormat::new().parse("").unwrap(), None);
    }

    #[test]
    fn test_parse_malformed() {
        let error = JsonFormat::new().parse(r#""unterminated"#).unwrap_err();
        assert!(matches!(error, DecodeError::ParseError { .. }));
        assert_eq!(error.raw(), Some(r#""unterminated"#));

        // whitespace is not zero-length
        assert!(JsonFormat::new().parse("  ").is_err());
    }

    #[test]
    fn test_render() {
        let format = JsonFormat::new();
        assert_eq!(format.render(&DocumentNode::from("")), r#""""#);
        assert_eq!(format.render(&DocumentNode::from(json!(["a", "b"]))), r#"["a","b"]"#);
    }

    #[test]
    fn test_metadata() {
        let format = JsonFormat::new();
        assert_eq!(format.name(), "json");
        assert_eq!(format.supported_extensions(), &["json"]);
    }
}
