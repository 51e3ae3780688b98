//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Bound listener
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (add and echo request ID)
//!     → [route table matches method + path under the base URL]
//!     → response.rs (file stream, generated mock data, or fallback)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{build_router, MockServer, ServerError};
