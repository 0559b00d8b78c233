//! Pidfile reading.

use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ProcessId;

/// Characters trimmed from both ends of the pidfile contents.
const PIDFILE_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

/// Errors produced while resolving the target process.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The pidfile could not be read.
    #[error("failed to read pidfile {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The trimmed contents are not a base-10 integer.
    #[error("unable to parse pid {content:?} from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        content: String,
        #[source]
        source: ParseIntError,
    },

    /// The pid parsed but cannot name a single process.
    #[error("pidfile {} holds non-positive pid {pid}", .path.display())]
    InvalidPid { path: PathBuf, pid: i32 },
}

impl ResolveError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ResolveError::Read { .. } => "read",
            ResolveError::Parse { .. } => "parse",
            ResolveError::InvalidPid { .. } => "invalid_pid",
        }
    }
}

/// Read `pidfile` and parse the process id it holds.
///
/// The file is read on every call; nothing is cached between calls.
pub fn resolve(pidfile: &Path) -> Result<ProcessId, ResolveError> {
    let bytes = fs::read(pidfile).map_err(|source| ResolveError::Read {
        path: pidfile.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let trimmed = text.trim_matches(PIDFILE_WHITESPACE);

    let raw: i32 = trimmed.parse().map_err(|source| ResolveError::Parse {
        path: pidfile.to_path_buf(),
        content: trimmed.to_string(),
        source,
    })?;

    ProcessId::new(raw).ok_or_else(|| ResolveError::InvalidPid {
        path: pidfile.to_path_buf(),
        pid: raw,
    })
}
