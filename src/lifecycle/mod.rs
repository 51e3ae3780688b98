//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Created → Binding → Listening
//!                       ↘ Failed → exit(1) (permission denied, address in use)
//!                                → fatal error (anything else)
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGINT/SIGTERM or Shutdown::trigger → stop accepting → drain → exit(0)
//! ```
//!
//! # Design Decisions
//! - Config is validated before binding, so misconfiguration never opens a socket
//! - No retry and no port reselection

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{bind, BoundListener, StartupError};
