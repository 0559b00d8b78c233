//! Shared utilities for end-to-end tests.

use std::convert::Infallible;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use watch_signal::lifecycle::event_loop;
use watch_signal::signal::{DispatchError, Dispatcher};
use watch_signal::target::ProcessId;
use watch_signal::watch::WatchSession;
use watch_signal::{SignalName, WatchConfig, WatchSignalError};

/// How long to wait for something that should happen.
pub const WAIT: Duration = Duration::from_secs(5);

/// How long to wait before concluding something did not happen.
pub const QUIET: Duration = Duration::from_millis(400);

/// Records every delivery attempt instead of calling kill(2).
pub struct RecordingDispatcher {
    tx: mpsc::UnboundedSender<(i32, SignalName)>,
}

impl Dispatcher for RecordingDispatcher {
    fn send(&self, pid: ProcessId, signal: SignalName) -> Result<(), DispatchError> {
        let _ = self.tx.send((pid.as_raw(), signal));
        Ok(())
    }
}

/// A running event loop over a real watch session.
pub struct Harness {
    _root: TempDir,
    pub watched: PathBuf,
    pub pidfile: PathBuf,
    dispatches: mpsc::UnboundedReceiver<(i32, SignalName)>,
    pub handle: JoinHandle<Result<Infallible, WatchSignalError>>,
}

impl Harness {
    /// Watch an empty directory, with the pidfile kept outside of it.
    pub fn start(signal: SignalName, pid: &str) -> Self {
        let root = TempDir::new().unwrap();
        let watched = root.path().join("watched");
        std::fs::create_dir(&watched).unwrap();
        let pidfile = root.path().join("app.pid");
        std::fs::write(&pidfile, pid).unwrap();

        let config = WatchConfig::new(signal, pidfile.clone(), vec![watched.clone()]);
        let (tx, dispatches) = mpsc::unbounded_channel();
        let dispatcher = RecordingDispatcher { tx };

        // Opened here so the watch is registered before the test touches files.
        let mut session = WatchSession::open(&config.paths).unwrap();
        let handle = tokio::spawn(async move {
            event_loop::run(&config, &mut session, &dispatcher).await
        });

        Self {
            _root: root,
            watched,
            pidfile,
            dispatches,
            handle,
        }
    }

    pub fn touch(&self, name: &str) {
        std::fs::File::create(self.watched.join(name)).unwrap();
    }

    pub fn write_pid(&self, pid: &str) {
        std::fs::write(&self.pidfile, pid).unwrap();
    }

    pub fn remove_pid(&self) {
        std::fs::remove_file(&self.pidfile).unwrap();
    }

    /// Wait for the next delivery attempt.
    pub async fn next_dispatch(&mut self) -> (i32, SignalName) {
        tokio::time::timeout(WAIT, self.dispatches.recv())
            .await
            .expect("no dispatch within timeout")
            .expect("dispatcher dropped")
    }

    /// Assert no delivery attempt happens for a while.
    pub async fn assert_no_dispatch(&mut self) {
        if let Ok(Some(dispatch)) = tokio::time::timeout(QUIET, self.dispatches.recv()).await {
            panic!("unexpected dispatch {dispatch:?}");
        }
    }
}
