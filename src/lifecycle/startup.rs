//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when configured
//! - Open the watch session for the configured paths
//! - Hand over to the event loop
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Configuration arrives validated; startup never re-checks it

use std::convert::Infallible;

use crate::config::WatchConfig;
use crate::error::Result;
use crate::lifecycle::event_loop;
use crate::observability::metrics;
use crate::signal::{Dispatcher, KillDispatcher};
use crate::watch::WatchSession;

/// Watch the configured paths and signal the pidfile's process with kill(2).
///
/// Returns only when a fatal error occurs.
pub async fn start(config: &WatchConfig) -> Result<Infallible> {
    start_with(config, &KillDispatcher).await
}

/// Like [`start`], delivering signals through `dispatcher`.
pub async fn start_with<D: Dispatcher>(config: &WatchConfig, dispatcher: &D) -> Result<Infallible> {
    if let Some(addr) = config.metrics_address {
        metrics::init_metrics(addr)?;
    }

    let mut session = WatchSession::open(&config.paths)?;

    tracing::info!(
        signal = %config.signal,
        pidfile = %config.pidfile.display(),
        paths = ?config.paths,
        "Startup completed"
    );

    event_loop::run(config, &mut session, dispatcher).await
}
