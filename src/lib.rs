//! Config-driven mock API server library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mock;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::MockServer;
pub use lifecycle::Shutdown;
pub use routing::RouteTable;
