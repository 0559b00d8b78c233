//! Configuration schema definitions.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::signal::SignalName;

/// Validated configuration for one watch-signal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Signal delivered on every change.
    pub signal: SignalName,

    /// File holding the target pid.
    pub pidfile: PathBuf,

    /// Paths to watch. Never empty.
    pub paths: Vec<PathBuf>,

    /// Debug logging.
    pub verbose: bool,

    /// Log line format.
    pub log_format: LogFormat,

    /// Prometheus listen address, if metrics are exported.
    pub metrics_address: Option<SocketAddr>,
}

impl WatchConfig {
    /// Minimal configuration with logging and metrics defaults.
    pub fn new(signal: SignalName, pidfile: impl Into<PathBuf>, paths: Vec<PathBuf>) -> Self {
        Self {
            signal,
            pidfile: pidfile.into(),
            paths,
            verbose: false,
            log_format: LogFormat::default(),
            metrics_address: None,
        }
    }
}

/// Configuration as typed by the user, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub signal: String,
    pub pidfile: PathBuf,
    pub paths: Vec<PathBuf>,
    pub verbose: bool,
    pub log_format: LogFormat,
    pub metrics_address: Option<String>,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable key=value lines.
    #[default]
    Pretty,

    /// One JSON object per line.
    Json,
}
