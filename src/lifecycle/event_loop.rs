//! The watch-signal event loop.
//!
//! # States
//! - Running: waiting for the next change or watcher error
//! - Terminated: a stream closed (terminal)
//!
//! # Design Decisions
//! - Exactly one message is handled per iteration, in arrival order
//! - The pidfile is resolved afresh for every change; pids are never cached
//! - Pidfile, watcher and delivery failures are logged and never end the loop

use std::convert::Infallible;

use crate::config::WatchConfig;
use crate::error::{Result, WatchSignalError};
use crate::observability::metrics;
use crate::signal::Dispatcher;
use crate::target;
use crate::watch::{ChangeEvent, SessionMessage, WatchSession};

/// Consume `session` until one of its streams closes.
pub async fn run<D: Dispatcher>(
    config: &WatchConfig,
    session: &mut WatchSession,
    dispatcher: &D,
) -> Result<Infallible> {
    loop {
        match session.next().await {
            SessionMessage::Change(event) => handle_change(config, dispatcher, &event),
            SessionMessage::Error(error) => {
                metrics::record_watch_error();
                tracing::warn!(err = %error, "Error while watching for file changes");
            }
            SessionMessage::Closed => return Err(WatchSignalError::WatcherClosed),
        }
    }
}

fn handle_change<D: Dispatcher>(config: &WatchConfig, dispatcher: &D, event: &ChangeEvent) {
    metrics::record_change();
    tracing::debug!(path = %event.path().display(), kind = ?event.kind, "File changed");

    let pid = match target::resolve(&config.pidfile) {
        Ok(pid) => pid,
        Err(e) => {
            metrics::record_resolve_failure(e.reason());
            tracing::warn!(
                pidfile = %config.pidfile.display(),
                err = %e,
                "Failed to resolve target pid"
            );
            return;
        }
    };

    tracing::debug!(signal = %config.signal, pid = %pid, "Signalling");
    match dispatcher.send(pid, config.signal) {
        Ok(()) => metrics::record_dispatch(config.signal, true),
        Err(e) => {
            metrics::record_dispatch(config.signal, false);
            tracing::warn!(err = %e, "Failed to deliver signal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use tempfile::TempDir;

    use crate::signal::{DispatchError, SignalName};
    use crate::target::ProcessId;
    use crate::watch::{ChangeKind, SessionFeed};

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<(i32, SignalName)>>,
    }

    impl Dispatcher for Recorder {
        fn send(&self, pid: ProcessId, signal: SignalName) -> std::result::Result<(), DispatchError> {
            self.sent.lock().unwrap().push((pid.as_raw(), signal));
            Ok(())
        }
    }

    struct Fixture {
        _dir: TempDir,
        config: WatchConfig,
    }

    impl Fixture {
        fn new(signal: SignalName) -> Self {
            let dir = TempDir::new().unwrap();
            let config = WatchConfig::new(
                signal,
                dir.path().join("app.pid"),
                vec![dir.path().to_path_buf()],
            );
            Self { _dir: dir, config }
        }

        fn write_pid(&self, content: &str) {
            std::fs::write(&self.config.pidfile, content).unwrap();
        }
    }

    fn touch(feed: &SessionFeed, name: &str) {
        assert!(feed.change(ChangeEvent::new(ChangeKind::Created, PathBuf::from(name))));
    }

    /// Feed everything, close the feed, then run the loop to completion.
    async fn drain(fixture: &Fixture, recorder: &Recorder, feed: impl FnOnce(&SessionFeed)) {
        let (tx, mut session) = WatchSession::channel();
        feed(&tx);
        drop(tx);

        let result = run(&fixture.config, &mut session, recorder).await;
        assert!(matches!(result, Err(WatchSignalError::WatcherClosed)));
    }

    #[tokio::test]
    async fn change_dispatches_configured_signal() {
        let fixture = Fixture::new(SignalName::Usr1);
        fixture.write_pid("1234");
        let recorder = Recorder::default();

        drain(&fixture, &recorder, |feed| touch(feed, "/d/new")).await;

        assert_eq!(*recorder.sent.lock().unwrap(), vec![(1234, SignalName::Usr1)]);
    }

    #[tokio::test]
    async fn every_signal_is_dispatched_as_configured() {
        for signal in SignalName::ALL {
            let fixture = Fixture::new(signal);
            fixture.write_pid("77\n");
            let recorder = Recorder::default();

            drain(&fixture, &recorder, |feed| touch(feed, "/d/f")).await;

            assert_eq!(*recorder.sent.lock().unwrap(), vec![(77, signal)]);
        }
    }

    #[tokio::test]
    async fn repeated_changes_are_not_coalesced() {
        let fixture = Fixture::new(SignalName::Hup);
        fixture.write_pid("42");
        let recorder = Recorder::default();

        drain(&fixture, &recorder, |feed| {
            for _ in 0..3 {
                touch(feed, "/d/same");
            }
        })
        .await;

        assert_eq!(recorder.sent.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unparsable_pid_skips_event_and_keeps_running() {
        let fixture = Fixture::new(SignalName::Hup);
        fixture.write_pid("abc");
        let recorder = Recorder::default();

        let (feed, mut session) = WatchSession::channel();
        touch(&feed, "/d/first");

        // Run until the first event has been consumed and dropped.
        let handled = tokio::time::timeout(
            std::time::Duration::from_millis(100),
            run(&fixture.config, &mut session, &recorder),
        )
        .await;
        assert!(handled.is_err(), "loop exited on a bad pidfile");
        assert!(recorder.sent.lock().unwrap().is_empty());

        fixture.write_pid("  42\n");
        touch(&feed, "/d/second");
        drop(feed);

        let result = run(&fixture.config, &mut session, &recorder).await;
        assert!(matches!(result, Err(WatchSignalError::WatcherClosed)));
        assert_eq!(*recorder.sent.lock().unwrap(), vec![(42, SignalName::Hup)]);
    }

    #[tokio::test]
    async fn missing_pidfile_skips_event() {
        let fixture = Fixture::new(SignalName::Term);
        let recorder = Recorder::default();

        drain(&fixture, &recorder, |feed| touch(feed, "/d/x")).await;

        assert!(recorder.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn pid_is_reread_for_each_event() {
        let fixture = Fixture::new(SignalName::Usr2);
        let recorder = Recorder::default();
        let (feed, mut session) = WatchSession::channel();

        for pid in ["100", "200"] {
            fixture.write_pid(pid);
            touch(&feed, "/d/conf");
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                run(&fixture.config, &mut session, &recorder),
            )
            .await;
        }

        assert_eq!(
            *recorder.sent.lock().unwrap(),
            vec![(100, SignalName::Usr2), (200, SignalName::Usr2)]
        );
    }

    #[tokio::test]
    async fn watcher_errors_do_not_stop_the_loop() {
        let fixture = Fixture::new(SignalName::Int);
        fixture.write_pid("9");
        let recorder = Recorder::default();

        drain(&fixture, &recorder, |feed| {
            feed.error(notify::Error::generic("queue overflow"));
            touch(feed, "/d/after-error");
        })
        .await;

        assert_eq!(*recorder.sent.lock().unwrap(), vec![(9, SignalName::Int)]);
    }

    #[tokio::test]
    async fn delivery_failure_is_not_fatal() {
        struct Refusing;
        impl Dispatcher for Refusing {
            fn send(&self, pid: ProcessId, signal: SignalName) -> std::result::Result<(), DispatchError> {
                Err(DispatchError {
                    pid,
                    signal,
                    source: nix::errno::Errno::EPERM,
                })
            }
        }

        let fixture = Fixture::new(SignalName::Kill);
        fixture.write_pid("1");
        let (feed, mut session) = WatchSession::channel();
        touch(&feed, "/d/a");
        touch(&feed, "/d/b");
        drop(feed);

        let result = run(&fixture.config, &mut session, &Refusing).await;
        assert!(matches!(result, Err(WatchSignalError::WatcherClosed)));
    }
}
