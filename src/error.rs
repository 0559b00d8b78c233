//! Fatal errors that end the process.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that terminate watch-signal with a non-zero exit status.
///
/// Recoverable per-event failures (pidfile, delivery, watcher warnings) are
/// logged where they happen and never become a `WatchSignalError`.
#[derive(Debug, Error)]
pub enum WatchSignalError {
    /// Configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The OS watch mechanism could not be created.
    #[error("failed to create filesystem watcher: {0}")]
    WatchSetup(#[source] notify::Error),

    /// A configured path could not be watched.
    #[error("failed to watch path {}: {source}", .path.display())]
    PathWatch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    /// The Prometheus exporter could not be installed.
    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// A notification stream closed; nothing more can be observed.
    #[error("watcher was closed")]
    WatcherClosed,
}

/// Result type for fatal operations.
pub type Result<T> = std::result::Result<T, WatchSignalError>;
