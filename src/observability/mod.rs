//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup      → logging.rs (subscriber, level from config or RUST_LOG)
//! each request → access_log.rs (method, path, status, latency, request ID)
//! ```
//!
//! # Design Decisions
//! - Structured logging through `tracing`
//! - Request ID flows from the request-id layer into the access log span

pub mod access_log;
pub mod logging;
