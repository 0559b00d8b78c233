//! Filesystem watching.
//!
//! # Data Flow
//! ```text
//! OS notification thread (inotify, FSEvents, ...)
//!     → session.rs forwarder (split multi-path events, drop access events)
//!     → change stream (ChangeEvent per path)
//!     → error stream (notify::Error, overflow notices)
//!     → event loop (sole consumer)
//! ```
//!
//! # Design Decisions
//! - One subscription per process, bound to a fixed path set
//! - Watches are non-recursive
//! - Streams are unbounded so the OS thread never blocks on the loop
//! - When every watched root has been removed the session ends and both
//!   streams close
//! - A watched file replaced by rename (`sed -i`, editors, config tools) loses
//!   its watch; if it was the last root the session ends after delivering the
//!   change. Watch the parent directory to survive atomic replacement

pub mod event;
pub mod session;

pub use event::{ChangeEvent, ChangeKind};
pub use session::{SessionFeed, SessionMessage, WatchSession};
