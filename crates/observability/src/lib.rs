//! Tracing/logging setup shared by the binary and the tests.
//!
//! The subscriber itself is ordinary; what gets *logged through it* is not
//! (the store layer logs full SQL text, credentials included). Keeping the
//! plumbing clean makes that exhibit easy to see.

pub mod tracing;

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init();
}
