//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{validate_config, ConfigError, LogFormat, RawConfig, WatchConfig};

#[derive(Debug, Parser)]
#[command(name = "watch-signal")]
#[command(about = "Signal a process when paths change", long_about = None)]
pub struct Cli {
    /// The POSIX signal to send when a watched path changes (without the "SIG" prefix)
    #[arg(value_name = "SIGNAL")]
    pub signal: String,

    /// Path to the file containing the PID to send the signal to
    #[arg(value_name = "PIDFILE")]
    pub pidfile: PathBuf,

    /// Filesystem paths to watch for changes
    #[arg(value_name = "PATHS", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Turn on verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Expose Prometheus metrics on this address (e.g. 127.0.0.1:9100)
    #[arg(long, value_name = "ADDR")]
    pub metrics_address: Option<String>,
}

impl Cli {
    /// Validate the parsed arguments into a [`WatchConfig`].
    pub fn into_config(self) -> Result<WatchConfig, ConfigError> {
        validate_config(RawConfig {
            signal: self.signal,
            pidfile: self.pidfile,
            paths: self.paths,
            verbose: self.verbose,
            log_format: self.log_format,
            metrics_address: self.metrics_address,
        })
    }
}
