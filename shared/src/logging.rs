//! Logging initialization

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Safe to call
/// more than once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging();
        init_logging();
        tracing::info!("logging initialized");
    }
}
