//! Signal delivery to a target process.

use nix::errno::Errno;
use nix::sys::signal::kill;
use thiserror::Error;

use super::SignalName;
use crate::target::ProcessId;

/// The OS refused to deliver a signal.
#[derive(Debug, Error)]
#[error("failed to send SIG{signal} to pid {pid}: {source}")]
pub struct DispatchError {
    pub pid: ProcessId,
    pub signal: SignalName,
    #[source]
    pub source: Errno,
}

/// Delivers a signal to a process.
///
/// Implementations must not block; the event loop calls `send` inline.
pub trait Dispatcher {
    fn send(&self, pid: ProcessId, signal: SignalName) -> Result<(), DispatchError>;
}

/// Delivers signals with kill(2).
#[derive(Debug, Clone, Copy, Default)]
pub struct KillDispatcher;

impl Dispatcher for KillDispatcher {
    fn send(&self, pid: ProcessId, signal: SignalName) -> Result<(), DispatchError> {
        kill(pid.into(), signal.to_nix()).map_err(|source| DispatchError {
            pid,
            signal,
            source,
        })
    }
}
