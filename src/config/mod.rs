//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML/JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → handed to the route table and the server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All server-wide fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::CorsConfig;
pub use schema::Port;
pub use schema::RouteDescriptor;
pub use schema::ServerConfig;
pub use validation::ValidationError;
