//! Telemetry and Observability
//!
//! Structured logging setup. The filter defaults to debug-level output for
//! this crate and tower-http request spans; RUST_LOG overrides it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing subscriber
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,calc_server=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .init();

    tracing::info!("Tracing initialized");
}
