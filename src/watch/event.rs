//! Change events surfaced by a watch session.

use std::path::{Path, PathBuf};

use notify::EventKind;

/// Kind of filesystem change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A file or directory was created.
    Created,

    /// Contents, metadata or name changed.
    Modified,

    /// A file or directory was removed.
    Removed,

    /// The backend could not say what happened.
    Other,
}

impl ChangeKind {
    /// Classify a notify event kind. Access events are not changes and map to
    /// `None`.
    pub fn from_notify(kind: &EventKind) -> Option<Self> {
        match kind {
            EventKind::Access(_) => None,
            EventKind::Create(_) => Some(ChangeKind::Created),
            EventKind::Modify(_) => Some(ChangeKind::Modified),
            EventKind::Remove(_) => Some(ChangeKind::Removed),
            EventKind::Any | EventKind::Other => Some(ChangeKind::Other),
        }
    }
}

/// A single change under a watched path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// What happened.
    pub kind: ChangeKind,

    /// The path that changed.
    pub path: PathBuf,
}

impl ChangeEvent {
    /// Create a new change event.
    pub fn new(kind: ChangeKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Split a notify event into one change per path it names.
    pub fn from_notify(event: &notify::Event) -> Vec<Self> {
        let Some(kind) = ChangeKind::from_notify(&event.kind) else {
            return Vec::new();
        };

        event
            .paths
            .iter()
            .map(|path| Self::new(kind, path.clone()))
            .collect()
    }

    /// Path that changed.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
