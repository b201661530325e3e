// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that both value adapters
//! round-trip through their canonical encodings for arbitrary inputs.

use flexval::domain::{DurationValue, MultiString};
use flexval::ports::NodeCodec;
use flexval::service::FieldCodec;
use proptest::prelude::*;

// Test that the canonical duration text re-parses to the same span
proptest! {
    #[test]
    fn test_duration_text_roundtrip(nanos in prop::num::i64::ANY) {
        let value = DurationValue::from_nanos(nanos);
        let parsed: DurationValue = value.to_string().parse().unwrap();
        prop_assert_eq!(parsed, value);
    }
}

// Test that decode(encode(d)) == d through the node codec
proptest! {
    #[test]
    fn test_duration_node_roundtrip(nanos in prop::num::i64::ANY) {
        let value = DurationValue::from_nanos(nanos);
        let mut decoded = DurationValue::default();
        decoded.decode_node(&value.encode()).unwrap();
        prop_assert_eq!(decoded, value);
    }
}

// Test that the canonical text is never empty and carries a sign only when negative
proptest! {
    #[test]
    fn test_duration_sign(nanos in prop::num::i64::ANY) {
        let text = DurationValue::from_nanos(nanos).to_string();
        prop_assert!(!text.is_empty());
        prop_assert_eq!(text.starts_with('-'), nanos < 0);
    }
}

// Test that whole-unit terms accumulate additively
proptest! {
    #[test]
    fn test_duration_terms_accumulate(
        hours in 0i64..10_000,
        minutes in 0i64..600,
        seconds in 0i64..600,
        millis in 0i64..10_000
    ) {
        let text = format!("{}h{}m{}s{}ms", hours, minutes, seconds, millis);
        let expected = DurationValue::HOUR * hours
            + DurationValue::MINUTE * minutes
            + DurationValue::SECOND * seconds
            + DurationValue::MILLISECOND * millis;
        prop_assert_eq!(text.parse::<DurationValue>().unwrap(), expected);

        let negative: DurationValue = format!("-{}", text).parse().unwrap();
        prop_assert_eq!(negative, -expected);
    }
}

// Test that strings without a known unit never parse
proptest! {
    #[test]
    fn test_duration_rejects_letters_only(s in "[a-z]{1,8}") {
        prop_assert!(s.parse::<DurationValue>().is_err());
    }
}

// Test that decode(encode(s)) == s for lists without blank elements
proptest! {
    #[test]
    fn test_multi_string_roundtrip(values in prop::collection::vec("\\PC+", 0..6)) {
        let value = MultiString::from(values);
        let mut decoded = MultiString::new();
        decoded.decode_node(&value.encode()).unwrap();
        prop_assert_eq!(decoded, value);
    }
}

// Test that lists of two or more keep blank elements through an encode/decode cycle
proptest! {
    #[test]
    fn test_multi_string_roundtrip_with_blanks(values in prop::collection::vec("\\PC*", 2..6)) {
        let value = MultiString::from(values);
        let codec = FieldCodec::json();
        let text = codec.encode_field(&value);
        let mut decoded = MultiString::new();
        codec.decode_field(Some(&mut decoded), &text).unwrap();
        prop_assert_eq!(decoded, value);
    }
}

// Test the cardinality to shape mapping through serde_json
proptest! {
    #[test]
    fn test_multi_string_shape(values in prop::collection::vec("[a-z]+", 0..6)) {
        let text = serde_json::to_string(&MultiString::from(values.clone())).unwrap();
        match values.len() {
            0 => prop_assert_eq!(text, "\"\""),
            1 => prop_assert_eq!(text, format!("\"{}\"", values[0])),
            _ => prop_assert!(text.starts_with('[')),
        }
    }
}

// Test that has_empties matches its definition
proptest! {
    #[test]
    fn test_has_empties_definition(values in prop::collection::vec("[a-b]{0,2}", 0..6)) {
        let expected = values.is_empty() || values.iter().any(|s| s.is_empty());
        prop_assert_eq!(MultiString::from(values).has_empties(), expected);
    }
}

// Test that first returns the first element or the empty string
proptest! {
    #[test]
    fn test_first_definition(values in prop::collection::vec("\\PC*", 0..6)) {
        let expected = values.first().cloned().unwrap_or_default();
        let ms = MultiString::from(values);
        prop_assert_eq!(ms.first(), expected.as_str());
    }
}
