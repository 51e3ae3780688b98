//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteDescriptor[]
//!     → method.rs (type/method allow-lists)
//!     → path.rs (normalize URL)
//!     → table.rs (fold into an immutable RouteTable + listing)
//!
//! Request time:
//!     the HTTP layer registers one handler per Route and lets the
//!     router match (method, path) under the base prefix
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Verb dispatch is an exhaustive match, never a name lookup
//! - First definition wins for a repeated (method, path)

pub mod method;
pub mod path;
pub mod table;

pub use method::{HttpMethod, ResponseKind};
pub use table::{Route, RouteTable};
