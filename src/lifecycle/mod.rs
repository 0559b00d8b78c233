//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → Metrics exporter → Open watch session → Event loop
//!
//! Event loop (event_loop.rs):
//!     Change → resolve pidfile → send signal
//!     Watcher error → warn, keep going
//!     Stream closed → fatal
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and the loop is never entered
//! - The loop only ends with an error; there is no shutdown command
//! - The watch session is dropped on every exit path, releasing OS watches

pub mod event_loop;
pub mod startup;
