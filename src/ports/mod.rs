// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits define how values are encoded to and decoded from document
//! nodes, and how raw document text becomes a node. Adapters implement the
//! format port; the domain types implement the codec port.

pub mod codec;
pub mod format;

// Re-export commonly used types
pub use codec::{decode_into, NodeCodec};
pub use format::DocumentFormat;
