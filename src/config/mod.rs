//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line (clap)
//!     → RawConfig (strings, as typed by the user)
//!     → validation.rs (semantic checks, typed signal)
//!     → WatchConfig (validated, immutable)
//!     → passed by reference to startup and the event loop
//! ```
//!
//! # Design Decisions
//! - Config is immutable once validated; there is no reload
//! - Validation reports every problem, not just the first
//! - No process-wide config state

pub mod schema;
pub mod validation;

pub use schema::{LogFormat, RawConfig, WatchConfig};
pub use validation::{validate_config, ConfigError, ValidationError};
