// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field codec that decodes raw field text into value adapters.
//!
//! A document decoder hands each field's raw text to a `FieldCodec`, which
//! parses it with the configured format and populates the target value.

use crate::adapters::JsonFormat;
#[cfg(feature = "yaml")]
use crate::adapters::YamlFormat;
use crate::domain::{DecodeError, Result};
use crate::ports::{DocumentFormat, NodeCodec};

/// Decodes and encodes single fields using a document format.
///
/// # Examples
///
/// ```rust
/// use flexval::domain::{DurationValue, MultiString};
/// use flexval::service::FieldCodec;
///
/// let codec = FieldCodec::json();
///
/// let mut timeout = DurationValue::default();
/// codec.decode_field(Some(&mut timeout), r#""1m30s""#).unwrap();
/// assert_eq!(timeout, DurationValue::from_secs(90));
///
/// let mut names = MultiString::new();
/// codec.decode_field(Some(&mut names), "").unwrap();
/// assert!(names.is_empty());
///
/// assert_eq!(codec.encode_field(&timeout), r#""1m30s""#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldCodec<F> {
    format: F,
}

impl<F: DocumentFormat> FieldCodec<F> {
    /// Creates a field codec for the given format.
    pub fn new(format: F) -> Self {
        Self { format }
    }

    /// Returns the underlying format.
    pub fn format(&self) -> &F {
        &self.format
    }

    /// Decodes raw field text into `target`.
    ///
    /// The target is checked first, then zero-length text is handed to
    /// [`NodeCodec::decode_absent`]; anything else is parsed and decoded.
    ///
    /// # Errors
    ///
    /// * `DecodeError::InvalidTargetError` - `target` is `None`
    /// * `DecodeError::ParseError` - the text is malformed or does not parse for the target
    /// * `DecodeError::ShapeError` - the node has a kind the target never accepts
    pub fn decode_field<T: NodeCodec>(&self, target: Option<&mut T>, text: &str) -> Result<()> {
        let Some(target) = target else {
            tracing::debug!(
                "Refusing to decode {} field without a target",
                self.format.name()
            );
            return Err(DecodeError::invalid_target::<T>());
        };

        let result = self.format.parse(text).and_then(|parsed| match parsed {
            Some(node) => target.decode_node(&node),
            None => {
                tracing::debug!(
                    "Empty {} field for {}",
                    self.format.name(),
                    std::any::type_name::<T>()
                );
                target.decode_absent()
            }
        });

        match &result {
            Ok(()) => tracing::trace!("Decoded {} field {:?}", self.format.name(), text),
            Err(e) => tracing::debug!(
                "Failed to decode {} field {:?}: {}",
                self.format.name(),
                text,
                e
            ),
        }
        result
    }

    /// Encodes `value` as field text.
    pub fn encode_field<T: NodeCodec>(&self, value: &T) -> String {
        self.format.render(&value.encode())
    }
}

impl FieldCodec<JsonFormat> {
    /// Creates a field codec for JSON.
    pub fn json() -> Self {
        Self::new(JsonFormat::new())
    }
}

#[cfg(feature = "yaml")]
impl FieldCodec<YamlFormat> {
    /// Creates a field codec for YAML.
    pub fn yaml() -> Self {
        Self::new(YamlFormat::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DurationValue, MultiString, NodeKind};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_decode_duration() {
        let codec = FieldCodec::json();
        let mut value = DurationValue::default();
        codec.decode_field(Some(&mut value), r#""-1.5h""#).unwrap();
        assert_eq!(value, -(DurationValue::MINUTE * 90));
    }

    #[test]
    fn test_decode_duration_number_is_shape_error() {
        let codec = FieldCodec::json();
        let mut value = DurationValue::default();
        let error = codec.decode_field(Some(&mut value), "5").unwrap_err();
        assert!(matches!(
            error,
            DecodeError::ShapeError {
                found: NodeKind::Number,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_duration_zero_length_fails() {
        let codec = FieldCodec::json();
        let mut value = DurationValue::default();
        assert!(matches!(
            codec.decode_field(Some(&mut value), ""),
            Err(DecodeError::ParseError { .. })
        ));
    }

    #[test]
    fn test_decode_multi_string_shapes() {
        let codec = FieldCodec::json();
        let mut value = MultiString::new();

        codec.decode_field(Some(&mut value), r#""a""#).unwrap();
        assert_eq!(value, MultiString::from("a"));

        codec.decode_field(Some(&mut value), r#"["a","b"]"#).unwrap();
        assert_eq!(value.len(), 2);

        codec.decode_field(Some(&mut value), "").unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_decode_malformed_text() {
        let codec = FieldCodec::json();
        let mut value = MultiString::new();
        let error = codec.decode_field(Some(&mut value), r#""a"#).unwrap_err();
        assert_eq!(error.raw(), Some(r#""a"#));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_malformed_text_is_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            let mut value = MultiString::from("keep");
            let result = FieldCodec::json().decode_field(Some(&mut value), r#"["a""#);
            assert_eq!(value, MultiString::from("keep"));
            result
        });

        assert!(matches!(result, Err(DecodeError::ParseError { .. })));
        let text = logs.text();
        assert!(text.contains("Failed to decode json field"), "{}", text);
    }

    #[test]
    fn test_decode_without_target() {
        let codec = FieldCodec::json();
        // checked before the zero-length rule
        let error = codec.decode_field::<MultiString>(None, "").unwrap_err();
        assert!(matches!(error, DecodeError::InvalidTargetError { .. }));
    }

    #[test]
    fn test_encode_field() {
        let codec = FieldCodec::json();
        assert_eq!(codec.encode_field(&MultiString::new()), r#""""#);
        assert_eq!(
            codec.encode_field(&MultiString::from_iter(["a", "b"])),
            r#"["a","b"]"#
        );
        assert_eq!(codec.encode_field(&DurationValue::from_millis(300)), r#""300ms""#);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_codec() {
        let codec = FieldCodec::yaml();
        let mut value = DurationValue::default();
        codec.decode_field(Some(&mut value), "2h45m").unwrap();
        assert_eq!(value.to_string(), "2h45m0s");

        let mut names = MultiString::new();
        codec.decode_field(Some(&mut names), "[a, b]").unwrap();
        assert_eq!(names.first(), "a");
        assert_eq!(codec.format().name(), "yaml");
    }
}
