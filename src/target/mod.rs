//! Target process resolution.
//!
//! # Responsibilities
//! - Read the pidfile on demand
//! - Turn its contents into a process id
//!
//! # Design Decisions
//! - Stateless: the pidfile is re-read for every change event so a restarted
//!   process is picked up under its new pid
//! - Every failure is recoverable for the caller; none of them end the loop

pub mod resolver;

use std::fmt;

use nix::unistd::Pid;

pub use resolver::{resolve, ResolveError};

/// A positive process id read from a pidfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(i32);

impl ProcessId {
    /// Wrap a raw pid. Zero and negative values address process groups in
    /// kill(2) and are rejected.
    pub fn new(raw: i32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// The raw numeric id.
    pub fn as_raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ProcessId> for Pid {
    fn from(pid: ProcessId) -> Self {
        Pid::from_raw(pid.0)
    }
}
