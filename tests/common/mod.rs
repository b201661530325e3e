// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a test-writer tracing subscriber once per test binary.
///
/// Set `RUST_LOG`-style filtering via the `TEST_LOG` environment variable,
/// e.g. `TEST_LOG=trace`.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let level = std::env::var("TEST_LOG")
            .ok()
            .and_then(|v| v.parse::<tracing::Level>().ok())
            .unwrap_or(tracing::Level::WARN);
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .try_init();
    });
}
