//! watch-signal
//!
//! Watches a set of filesystem paths and, on every change, sends a signal to the
//! process whose pid is stored in a pidfile.
//!
//! # Architecture Overview
//!
//! ```text
//!     CLI args ──▶ config ──▶ lifecycle::startup
//!                                   │
//!                                   ▼
//!                          watch::WatchSession ──┬── change stream ──┐
//!                           (notify, OS thread)  └── error stream ───┤
//!                                                                    ▼
//!                                                       lifecycle::event_loop
//!                                                                    │
//!                                      target::resolve (pidfile) ◀───┤
//!                                                                    ▼
//!                                             signal::Dispatcher (kill(2))
//! ```

// Core subsystems
pub mod config;
pub mod lifecycle;
pub mod signal;
pub mod target;
pub mod watch;

// Cross-cutting concerns
pub mod cli;
pub mod error;
pub mod observability;

pub use config::WatchConfig;
pub use error::WatchSignalError;
pub use signal::SignalName;
