//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - Calculation counts by operator and outcome

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Calculation counter - tracks evaluated requests by operator and outcome
pub static CALCULATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("calculations_total", "Total number of evaluated calculations")
            .namespace("calc_server"),
        &["operator", "outcome"],
    )
    .expect("Failed to create CALCULATIONS_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(CALCULATIONS_TOTAL.clone()))
        .expect("Failed to register CALCULATIONS_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// Helper to record a calculation metric
pub fn record_calculation(operator: &str, outcome: &str) {
    CALCULATIONS_TOTAL
        .with_label_values(&[operator, outcome])
        .inc();
}
