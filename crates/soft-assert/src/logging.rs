use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber for test binaries.
///
/// Output goes through the test writer so it is captured per test, and the
/// filter is read from `RUST_LOG`. Safe to call from every test; only the
/// first call installs anything.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_target(false)
        .try_init();
}
