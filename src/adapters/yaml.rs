// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document format adapter.
//!
//! YAML is a superset of the JSON-like shapes the value adapters accept, so the
//! same fields can be written in either format.

use crate::domain::{DecodeError, DocumentNode, Result};
use crate::ports::DocumentFormat;

/// YAML format backed by `serde_yaml`.
///
/// # Examples
///
/// ```rust
/// use flexval::adapters::YamlFormat;
/// use flexval::domain::DocumentNode;
/// use flexval::ports::DocumentFormat;
///
/// let format = YamlFormat::new();
/// let node = format.parse("[a, b]").unwrap().unwrap();
/// assert_eq!(node.to_string(), r#"["a","b"]"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl YamlFormat {
    /// Creates a new YAML format.
    pub fn new() -> Self {
        YamlFormat
    }
}

impl DocumentFormat for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn parse(&self, text: &str) -> Result<Option<DocumentNode>> {
        if text.is_empty() {
            return Ok(None);
        }
        let value: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| DecodeError::parse(text, e))?;
        Ok(Some(DocumentNode::from(value)))
    }

    fn render(&self, node: &DocumentNode) -> String {
        match serde_yaml::to_string(node) {
            Ok(text) => text.trim_end().to_string(),
            // JSON is valid YAML
            Err(_) => node.to_string(),
        }
    }
}
