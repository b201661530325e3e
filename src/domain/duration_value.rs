// SPDX-License-Identifier: MIT OR Apache-2.0

//! Signed duration values decoded from human readable strings.
//!
//! A duration string is a possibly signed sequence of decimal numbers, each
//! with an optional fraction and a unit suffix, such as `"300ms"`, `"-1.5h"` or
//! `"2h45m"`. Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.

use crate::domain::document::DocumentNode;
use crate::domain::errors::{DecodeError, DurationSyntaxError, Result};
use crate::ports::NodeCodec;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Largest magnitude a negative span can reach, `|i64::MIN|`.
const MAGNITUDE_LIMIT: u64 = 1 << 63;

/// Unit suffixes and their length in nanoseconds.
const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", NANOS_PER_MICRO),
    ("\u{00b5}s", NANOS_PER_MICRO), // micro sign
    ("\u{03bc}s", NANOS_PER_MICRO), // greek small letter mu
    ("ms", NANOS_PER_MILLI),
    ("s", NANOS_PER_SECOND),
    ("m", 60 * NANOS_PER_SECOND),
    ("h", 3600 * NANOS_PER_SECOND),
];

/// A signed span of time with nanosecond resolution.
///
/// `DurationValue` decodes from a duration string node and encodes back to its
/// canonical string form, which always re-parses to the same span.
///
/// # Examples
///
/// ```
/// use flexval::domain::DurationValue;
///
/// let value: DurationValue = "2h45m".parse().unwrap();
/// assert_eq!(value, DurationValue::HOUR * 2 + DurationValue::MINUTE * 45);
/// assert_eq!(value.to_string(), "2h45m0s");
///
/// let value: DurationValue = "-1.5h".parse().unwrap();
/// assert_eq!(value.to_string(), "-1h30m0s");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DurationValue(i64);

impl DurationValue {
    /// The zero span.
    pub const ZERO: DurationValue = DurationValue(0);
    /// One nanosecond.
    pub const NANOSECOND: DurationValue = DurationValue(1);
    /// One microsecond.
    pub const MICROSECOND: DurationValue = DurationValue(NANOS_PER_MICRO as i64);
    /// One millisecond.
    pub const MILLISECOND: DurationValue = DurationValue(NANOS_PER_MILLI as i64);
    /// One second.
    pub const SECOND: DurationValue = DurationValue(NANOS_PER_SECOND as i64);
    /// One minute.
    pub const MINUTE: DurationValue = DurationValue(60 * NANOS_PER_SECOND as i64);
    /// One hour.
    pub const HOUR: DurationValue = DurationValue(3600 * NANOS_PER_SECOND as i64);

    /// Creates a span from a signed nanosecond count.
    pub const fn from_nanos(nanos: i64) -> Self {
        DurationValue(nanos)
    }

    /// Creates a span from whole milliseconds, saturating at the `i64` range.
    pub const fn from_millis(millis: i64) -> Self {
        DurationValue(millis.saturating_mul(NANOS_PER_MILLI as i64))
    }

    /// Creates a span from whole seconds, saturating at the `i64` range.
    pub const fn from_secs(secs: i64) -> Self {
        DurationValue(secs.saturating_mul(NANOS_PER_SECOND as i64))
    }

    /// Returns the span as a signed nanosecond count.
    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    /// Returns true if the span is below zero.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns true if the span is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Converts to a `std::time::Duration`, or `None` if the span is negative.
    pub fn to_std(&self) -> Option<Duration> {
        u64::try_from(self.0).ok().map(Duration::from_nanos)
    }
}

// Arithmetic saturates at the `i64` nanosecond range.
impl std::ops::Add for DurationValue {
    type Output = DurationValue;

    fn add(self, rhs: DurationValue) -> DurationValue {
        DurationValue(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Mul<i64> for DurationValue {
    type Output = DurationValue;

    fn mul(self, rhs: i64) -> DurationValue {
        DurationValue(self.0.saturating_mul(rhs))
    }
}

impl std::ops::Neg for DurationValue {
    type Output = DurationValue;

    fn neg(self) -> DurationValue {
        DurationValue(self.0.saturating_neg())
    }
}

impl TryFrom<Duration> for DurationValue {
    type Error = DurationSyntaxError;

    fn try_from(duration: Duration) -> std::result::Result<Self, Self::Error> {
        i64::try_from(duration.as_nanos())
            .map(DurationValue)
            .map_err(|_| DurationSyntaxError::Overflow)
    }
}

impl From<DurationValue> for i64 {
    fn from(value: DurationValue) -> Self {
        value.0
    }
}

/// Parses a duration string into a signed nanosecond count.
///
/// The sign applies to the whole expression. The text `"0"` needs no unit.
pub fn parse_duration(text: &str) -> std::result::Result<i64, DurationSyntaxError> {
    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if rest == "0" {
        return Ok(0);
    }
    if rest.is_empty() {
        return Err(DurationSyntaxError::Empty);
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let first = rest.as_bytes()[0];
        if !(first == b'.' || first.is_ascii_digit()) {
            return Err(DurationSyntaxError::Invalid);
        }

        let (whole, after_whole) = leading_int(rest)?;
        let has_whole = after_whole.len() != rest.len();
        rest = after_whole;

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if let Some(after_point) = rest.strip_prefix('.') {
            let (digits, digits_scale, remaining) = leading_fraction(after_point);
            has_fraction = remaining.len() != after_point.len();
            fraction = digits;
            scale = digits_scale;
            rest = remaining;
        }
        if !has_whole && !has_fraction {
            return Err(DurationSyntaxError::Invalid);
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(DurationSyntaxError::MissingUnit);
        }
        let (unit, remaining) = rest.split_at(unit_len);
        rest = remaining;
        let unit_nanos = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, nanos)| *nanos)
            .ok_or_else(|| DurationSyntaxError::UnknownUnit {
                unit: unit.to_string(),
            })?;

        if whole > MAGNITUDE_LIMIT / unit_nanos {
            return Err(DurationSyntaxError::Overflow);
        }
        let mut term = whole * unit_nanos;
        if fraction > 0 {
            // f64 keeps fractions of an hour accurate to the nanosecond
            term += (fraction as f64 * (unit_nanos as f64 / scale)) as u64;
            if term > MAGNITUDE_LIMIT {
                return Err(DurationSyntaxError::Overflow);
            }
        }
        total = total
            .checked_add(term)
            .filter(|sum| *sum <= MAGNITUDE_LIMIT)
            .ok_or(DurationSyntaxError::Overflow)?;
    }

    if negative {
        Ok((total as i64).wrapping_neg())
    } else {
        i64::try_from(total).map_err(|_| DurationSyntaxError::Overflow)
    }
}

/// Consumes leading ASCII digits as an integer.
fn leading_int(s: &str) -> std::result::Result<(u64, &str), DurationSyntaxError> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    for b in s[..len].bytes() {
        if value > MAGNITUDE_LIMIT / 10 {
            return Err(DurationSyntaxError::Overflow);
        }
        value = value * 10 + u64::from(b - b'0');
        if value > MAGNITUDE_LIMIT {
            return Err(DurationSyntaxError::Overflow);
        }
    }
    Ok((value, &s[len..]))
}

/// Consumes leading ASCII digits as the fraction `value / scale`.
///
/// Digits past the precision of a `u64` are consumed and dropped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for b in s[..len].bytes() {
        if overflow {
            continue;
        }
        if value > (i64::MAX as u64) / 10 {
            overflow = true;
            continue;
        }
        let next = value * 10 + u64::from(b - b'0');
        if next > MAGNITUDE_LIMIT {
            overflow = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, &s[len..])
}

/// Writes `value / 10^precision` with trailing fractional zeros removed.
fn write_decimal(f: &mut fmt::Formatter<'_>, value: u64, precision: u32) -> fmt::Result {
    let divisor = 10u64.pow(precision);
    let whole = value / divisor;
    let remainder = value % divisor;
    if remainder == 0 {
        return write!(f, "{}", whole);
    }
    let digits = format!("{:0width$}", remainder, width = precision as usize);
    write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
}

/// Formats the canonical form: `"0s"`, a single sub-second unit such as
/// `"1.5µs"`, or `h`/`m`/`s` components such as `"72h3m0.5s"`.
impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        if magnitude == 0 {
            return f.write_str("0s");
        }
        if self.0 < 0 {
            f.write_str("-")?;
        }

        if magnitude < NANOS_PER_SECOND {
            let (precision, unit) = if magnitude < NANOS_PER_MICRO {
                (0, "ns")
            } else if magnitude < NANOS_PER_MILLI {
                (3, "\u{00b5}s")
            } else {
                (6, "ms")
            };
            write_decimal(f, magnitude, precision)?;
            return f.write_str(unit);
        }

        let seconds = magnitude / NANOS_PER_SECOND;
        let minutes = seconds / 60;
        let hours = minutes / 60;
        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if minutes > 0 {
            write!(f, "{}m", minutes % 60)?;
        }
        write_decimal(f, (seconds % 60) * NANOS_PER_SECOND + magnitude % NANOS_PER_SECOND, 9)?;
        f.write_str("s")
    }
}

impl FromStr for DurationValue {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_duration(s)
            .map(DurationValue)
            .map_err(|e| DecodeError::parse(s, e))
    }
}

impl NodeCodec for DurationValue {
    fn encode(&self) -> DocumentNode {
        DocumentNode::String(self.to_string())
    }

    fn decode_node(&mut self, node: &DocumentNode) -> Result<()> {
        match node {
            DocumentNode::String(text) => {
                *self = text.parse()?;
                Ok(())
            }
            other => Err(DecodeError::ShapeError {
                expected: "string",
                found: other.kind(),
            }),
        }
    }

    fn decode_absent(&mut self) -> Result<()> {
        Err(DecodeError::parse("", DurationSyntaxError::Empty))
    }
}

impl Serialize for DurationValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DurationValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = DocumentNode::deserialize(deserializer)?;
        let mut value = DurationValue::default();
        value.decode_node(&node).map_err(de::Error::custom)?;
        Ok(value)
    }
}
