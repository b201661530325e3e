// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flexible value adapters for configuration documents.
//!
//! This crate provides two small value types that decode loosely written
//! configuration fields into a single canonical in-memory form:
//!
//! - [`DurationValue`](domain::DurationValue): a signed time span written as a
//!   duration string such as `"300ms"`, `"-1.5h"` or `"2h45m"`.
//! - [`MultiString`](domain::MultiString): a list of strings written either as
//!   a single string or as an array of strings.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The value types, the generic `DocumentNode` and errors
//! - **Ports**: `NodeCodec` (value <-> node) and `DocumentFormat` (text <-> node)
//! - **Adapters**: JSON and YAML formats
//! - **Service**: `FieldCodec`, which decodes one field's raw text into a value
//!
//! Both value types also implement `serde::Serialize` and `serde::Deserialize`
//! so they can be used directly as fields of derived configuration structs.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML support (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use flexval::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct AuthorityConfig {
//!     backdate: DurationValue,
//!     #[serde(default)]
//!     dns_names: MultiString,
//! }
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config: AuthorityConfig =
//!     serde_json::from_str(r#"{"backdate": "1m", "dns_names": ["ca", "ca.local"]}"#)?;
//! assert_eq!(config.backdate, DurationValue::MINUTE);
//! assert_eq!(config.dns_names.first(), "ca");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::JsonFormat;
    pub use crate::domain::{
        DecodeError, DocumentNode, DurationSyntaxError, DurationValue, MultiString, NodeKind,
        Result,
    };
    pub use crate::ports::{decode_into, DocumentFormat, NodeCodec};
    pub use crate::service::FieldCodec;

    // Re-export adapters based on feature flags
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlFormat;
}
