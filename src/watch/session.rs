//! Watch session over a fixed set of paths.

use std::path::{Path, PathBuf};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::error::{Result, WatchSignalError};
use crate::watch::event::ChangeEvent;

/// The next value produced by a watch session.
#[derive(Debug)]
pub enum SessionMessage {
    /// A watched path changed.
    Change(ChangeEvent),

    /// The watcher reported an error.
    Error(notify::Error),

    /// A stream closed; the session has ended.
    Closed,
}

/// Producer side of a session's two streams.
///
/// Dropping every clone closes both streams.
#[derive(Debug, Clone)]
pub struct SessionFeed {
    events: mpsc::UnboundedSender<ChangeEvent>,
    errors: mpsc::UnboundedSender<notify::Error>,
}

impl SessionFeed {
    /// Push a change event. Returns `false` once the session is gone.
    pub fn change(&self, event: ChangeEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// Push a watcher error. Returns `false` once the session is gone.
    pub fn error(&self, error: notify::Error) -> bool {
        self.errors.send(error).is_ok()
    }
}

/// Owns the OS watch subscription and the two streams it feeds.
///
/// Dropping the session releases the OS watch descriptors.
pub struct WatchSession {
    watcher: Option<RecommendedWatcher>,
    events: mpsc::UnboundedReceiver<ChangeEvent>,
    errors: mpsc::UnboundedReceiver<notify::Error>,
}

impl WatchSession {
    /// Create a session with no OS watcher behind it.
    ///
    /// Returns the feed that produces its streams.
    pub fn channel() -> (SessionFeed, Self) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (errors_tx, errors_rx) = mpsc::unbounded_channel();

        let feed = SessionFeed {
            events: events_tx,
            errors: errors_tx,
        };
        let session = Self {
            watcher: None,
            events: events_rx,
            errors: errors_rx,
        };
        (feed, session)
    }

    /// Watch every path in `paths`, non-recursively.
    ///
    /// Fails on the first path that cannot be registered; no partial session
    /// is returned.
    pub fn open(paths: &[PathBuf]) -> Result<Self> {
        let (feed, mut session) = Self::channel();
        let mut forwarder = Forwarder::new(feed, paths);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            forwarder.handle(res);
        })
        .map_err(WatchSignalError::WatchSetup)?;

        for path in paths {
            watcher
                .watch(path, RecursiveMode::NonRecursive)
                .map_err(|source| WatchSignalError::PathWatch {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(path = %path.display(), "Watching path");
        }

        session.watcher = Some(watcher);
        Ok(session)
    }

    /// Whether an OS watcher backs this session.
    pub fn is_attached(&self) -> bool {
        self.watcher.is_some()
    }

    /// Wait for the next change, error or stream closure.
    ///
    /// Buffered changes are returned before a closure is reported.
    pub async fn next(&mut self) -> SessionMessage {
        tokio::select! {
            biased;
            event = self.events.recv() => match event {
                Some(event) => SessionMessage::Change(event),
                None => SessionMessage::Closed,
            },
            error = self.errors.recv() => match error {
                Some(error) => SessionMessage::Error(error),
                None => SessionMessage::Closed,
            },
        }
    }
}

impl Drop for WatchSession {
    fn drop(&mut self) {
        if self.watcher.take().is_some() {
            tracing::debug!("Watch session closed");
        }
    }
}

/// A configured root, matched in the forms a backend may report it.
struct WatchedRoot {
    forms: Vec<PathBuf>,
}

impl WatchedRoot {
    fn new(path: &Path) -> Self {
        let mut forms = vec![path.to_path_buf()];
        if path.is_relative() {
            if let Ok(cwd) = std::env::current_dir() {
                forms.push(cwd.join(path));
            }
        }
        if let Ok(canonical) = path.canonicalize() {
            forms.push(canonical);
        }
        Self { forms }
    }

    fn matches(&self, path: &Path) -> bool {
        self.forms.iter().any(|form| form == path)
    }
}

/// Runs on the notify thread and feeds the session streams.
struct Forwarder {
    feed: Option<SessionFeed>,
    roots: Vec<WatchedRoot>,
}

impl Forwarder {
    fn new(feed: SessionFeed, paths: &[PathBuf]) -> Self {
        Self {
            feed: Some(feed),
            roots: paths.iter().map(|path| WatchedRoot::new(path)).collect(),
        }
    }

    fn handle(&mut self, res: notify::Result<Event>) {
        let Some(feed) = &self.feed else {
            return;
        };

        let event = match res {
            Ok(event) => event,
            Err(error) => {
                feed.error(error);
                return;
            }
        };

        if event.need_rescan() {
            feed.error(notify::Error::generic(
                "event queue overflowed; some changes were missed",
            ));
        }

        for change in ChangeEvent::from_notify(&event) {
            feed.change(change);
        }

        if event.kind.is_remove() {
            self.roots
                .retain(|root| !event.paths.iter().any(|path| root.matches(path)));
            if self.roots.is_empty() {
                tracing::warn!("Every watched path was removed, closing watch session");
                self.feed = None;
            }
        }
    }
}
