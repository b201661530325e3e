// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the value types and their errors.
//!
//! This module holds the two value adapters, the generic document node they
//! decode from, and the error types. It does not depend on any particular
//! document format.

pub mod document;
pub mod duration_value;
pub mod errors;
pub mod multi_string;

// Re-export commonly used types
pub use document::{DocumentNode, NodeKind};
pub use duration_value::{parse_duration, DurationValue};
pub use errors::{DecodeError, DurationSyntaxError, MultiStringError, Result};
pub use multi_string::MultiString;
