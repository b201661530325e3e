// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing document format implementations.
//!
//! Each adapter implements the `DocumentFormat` port for one textual format.

pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
pub use json::JsonFormat;
#[cfg(feature = "yaml")]
pub use yaml::YamlFormat;
