//! Signal selection and delivery.
//!
//! # Data Flow
//! ```text
//! CLI signal name ("USR1")
//!     → name.rs (closed enum, pure lookup)
//!     → SignalName (fixed for the process lifetime)
//!
//! Per change event:
//!     ProcessId + SignalName
//!     → dispatcher.rs (kill(2))
//! ```
//!
//! # Design Decisions
//! - Signal names form a closed enum; there is no mutable lookup table
//! - Delivery is best-effort: failures are reported to the caller, who logs them
//! - No existence check before delivery; the kernel reports missing processes

pub mod dispatcher;
pub mod name;

pub use dispatcher::{DispatchError, Dispatcher, KillDispatcher};
pub use name::{SignalName, UnknownSignal};
