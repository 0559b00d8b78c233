//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup, event loop, watch session produce:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → Log collection (journald, container runtime, terminal)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured key/value logging; JSON available for machine parsing
//! - Metrics are cheap no-ops unless an exporter is installed

pub mod logging;
pub mod metrics;
