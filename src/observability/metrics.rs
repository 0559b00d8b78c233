//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define watch-signal counters
//! - Expose a Prometheus-compatible endpoint when requested
//!
//! # Metrics
//! - `watch_signal_changes_total` (counter): change events handled
//! - `watch_signal_watch_errors_total` (counter): errors reported by the watcher
//! - `watch_signal_resolve_failures_total` (counter): pidfile failures by reason
//! - `watch_signal_dispatches_total` (counter): delivery attempts by signal, outcome
//!
//! # Design Decisions
//! - Counters only; the loop has no latency worth a histogram
//! - Without an installed recorder every call is a no-op

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::signal::SignalName;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within the tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!("watch_signal_changes_total", "Change events handled");
    describe_counter!(
        "watch_signal_watch_errors_total",
        "Errors reported by the filesystem watcher"
    );
    describe_counter!(
        "watch_signal_resolve_failures_total",
        "Change events dropped because the pidfile could not be resolved"
    );
    describe_counter!(
        "watch_signal_dispatches_total",
        "Signal delivery attempts"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_change() {
    counter!("watch_signal_changes_total").increment(1);
}

pub fn record_watch_error() {
    counter!("watch_signal_watch_errors_total").increment(1);
}

pub fn record_resolve_failure(reason: &'static str) {
    counter!("watch_signal_resolve_failures_total", "reason" => reason).increment(1);
}

pub fn record_dispatch(signal: SignalName, delivered: bool) {
    let outcome = if delivered { "delivered" } else { "failed" };
    counter!(
        "watch_signal_dispatches_total",
        "signal" => signal.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
