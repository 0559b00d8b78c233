//! Configuration validation.
//!
//! # Responsibilities
//! - Resolve the signal name against the supported set
//! - Require a pidfile and at least one watch path
//! - Parse the optional metrics address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: RawConfig → Result<WatchConfig, ConfigError>
//! - Runs before any watch is established

use std::fmt;
use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

use crate::config::schema::{RawConfig, WatchConfig};
use crate::signal::{SignalName, UnknownSignal};

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} (expected one of {names})", names = SignalName::names())]
    UnknownSignal(#[from] UnknownSignal),

    #[error("pidfile path is empty")]
    EmptyPidfile,

    #[error("at least one path to watch is required")]
    NoPaths,

    #[error("watch path #{index} is empty")]
    EmptyPath { index: usize },

    #[error("invalid metrics address {value:?}: {source}")]
    MetricsAddress {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Configuration was rejected.
#[derive(Debug)]
pub struct ConfigError {
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

/// Validate `raw` and produce the typed configuration.
pub fn validate_config(raw: RawConfig) -> Result<WatchConfig, ConfigError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    let signal = raw
        .signal
        .parse::<SignalName>()
        .map_err(|e| errors.push(e.into()))
        .ok();

    if raw.pidfile.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyPidfile);
    }

    if raw.paths.is_empty() {
        errors.push(ValidationError::NoPaths);
    }
    for (index, path) in raw.paths.iter().enumerate() {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyPath { index });
        }
    }

    let metrics_address = match raw.metrics_address {
        Some(value) => match value.parse::<SocketAddr>() {
            Ok(addr) => Some(addr),
            Err(source) => {
                errors.push(ValidationError::MetricsAddress { value, source });
                None
            }
        },
        None => None,
    };

    match signal {
        Some(signal) if errors.is_empty() => Ok(WatchConfig {
            signal,
            pidfile: raw.pidfile,
            paths: raw.paths,
            verbose: raw.verbose,
            log_format: raw.log_format,
            metrics_address,
        }),
        _ => Err(ConfigError { errors }),
    }
}
