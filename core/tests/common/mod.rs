//! Common test utilities for integration tests

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a test subscriber once; later calls are no-ops
///
/// Logs are captured by the test harness and shown for failing tests,
/// filtered by `RUST_LOG` (default `healthy_coder_core=debug`).
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "healthy_coder_core=debug".into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Path of a file under `tests/data`
#[allow(dead_code)]
pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
