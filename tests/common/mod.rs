#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
///
/// `RUST_LOG` selects the levels; without it only warnings are shown.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Pins the static type of a value.
pub fn assert_type<T>(_: &T) {}
