// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer wiring document formats to the value adapters.

pub mod field_codec;

// Re-export commonly used types
pub use field_codec::FieldCodec;
