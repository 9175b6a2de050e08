//! Testing utilities for the dkex library
//!
//! Known-answer vectors, the statistical timing harness used by the
//! constant-time tests, and a shared tracing setup for integration tests.


use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Install a test-writer tracing subscriber once per test binary
///
/// The filter comes from `RUST_LOG`; nothing is printed by default.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
