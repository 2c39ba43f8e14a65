//! Telemetry helpers for structured logging and tracing.

/// Initialize tracing. Hosts can install their own subscriber; this helper
/// installs a default env-filtered fmt subscriber only if none is set.
///
/// Queue diagnostics are emitted under the `resource_aware_queue` target, so
/// `RUST_LOG=resource_aware_queue=debug` shows every skipped task.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
