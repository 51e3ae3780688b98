//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the mock server.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root configuration for the mock server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Prefix prepended to every configured route (e.g., "/api").
    #[serde(rename = "baseURL", alias = "base_url")]
    pub base_url: String,

    /// Interface to listen on when `port` is a TCP port.
    pub host: String,

    /// TCP port number, or a Unix socket path ("pipe").
    pub port: Port,

    /// Optional CORS policy. Absent or empty disables CORS.
    pub cors: Option<CorsConfig>,

    /// Directory that `file` routes resolve their `data` path against.
    /// Defaults to the directory holding the config file.
    pub root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Route definitions, registered in order.
    pub apis: Vec<RouteDescriptor>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            host: "0.0.0.0".to_string(),
            port: Port::default(),
            cors: None,
            root: None,
            log_level: "info".to_string(),
            apis: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Directory used to resolve `file` route paths.
    pub fn asset_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Listen target: a TCP port number or a named pipe (Unix socket path).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Port {
    Number(u16),
    Named(String),
}

impl Default for Port {
    fn default() -> Self {
        Port::Number(3000)
    }
}

impl Port {
    /// TCP port, if this target is one. Numeric strings count as ports.
    pub fn tcp_port(&self) -> Option<u16> {
        match self {
            Port::Number(port) => Some(*port),
            Port::Named(name) => name.trim().parse().ok(),
        }
    }

    /// Label used in bind diagnostics: "Port 3000" or "Pipe /tmp/mock.sock".
    pub fn bind_label(&self) -> String {
        match self {
            Port::Number(port) => format!("Port {}", port),
            Port::Named(name) => format!("Pipe {}", name),
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(port) => write!(f, "{}", port),
            Port::Named(name) => write!(f, "{}", name),
        }
    }
}

/// One configured endpoint, exactly as written in the config file.
///
/// `method` and `type` stay raw strings here; routing validates and
/// converts them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteDescriptor {
    /// Route path relative to `baseURL`.
    pub url: String,

    /// HTTP verb (case-insensitive).
    #[serde(default = "default_method")]
    pub method: String,

    /// Response type: "file" or "mock" (case-insensitive).
    #[serde(rename = "type")]
    pub kind: String,

    /// File path for `file` routes, template for `mock` routes.
    #[serde(default)]
    pub data: Value,
}

fn default_method() -> String {
    "get".to_string()
}

impl RouteDescriptor {
    pub fn new(
        url: impl Into<String>,
        method: impl Into<String>,
        kind: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            kind: kind.into(),
            data,
        }
    }
}

/// CORS policy. Keys use the common `origin`/`methods`/`allowedHeaders` option names.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorsConfig {
    /// `true` reflects the request origin, `false` disables CORS,
    /// a string or list restricts to those origins. Default "*".
    pub origin: Option<OriginSetting>,

    /// Allowed methods, as a list or a comma separated string.
    pub methods: Option<StringList>,

    /// Allowed request headers. Default mirrors the request.
    #[serde(alias = "allowed_headers")]
    pub allowed_headers: Option<StringList>,

    /// Headers exposed to the browser.
    #[serde(alias = "exposed_headers")]
    pub exposed_headers: Option<StringList>,

    /// Send `Access-Control-Allow-Credentials: true`.
    pub credentials: Option<bool>,

    /// Preflight cache lifetime in seconds.
    #[serde(alias = "max_age")]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    /// An empty table means "no CORS", like an empty options object.
    pub fn is_empty(&self) -> bool {
        self.origin.is_none()
            && self.methods.is_none()
            && self.allowed_headers.is_none()
            && self.exposed_headers.is_none()
            && self.credentials.is_none()
            && self.max_age.is_none()
    }

    /// Whether a CORS layer should be installed at all.
    pub fn is_enabled(&self) -> bool {
        !self.is_empty() && !matches!(self.origin, Some(OriginSetting::Enabled(false)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OriginSetting {
    Enabled(bool),
    Single(String),
    List(Vec<String>),
}

/// A list given either as an array or as a comma separated string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StringList {
    List(Vec<String>),
    Joined(String),
}

impl StringList {
    pub fn items(&self) -> Vec<String> {
        match self {
            StringList::List(items) => items
                .iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
            StringList::Joined(joined) => joined
                .split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_labels() {
        assert_eq!(Port::Number(8080).bind_label(), "Port 8080");
        assert_eq!(Port::Named("/tmp/mock.sock".into()).bind_label(), "Pipe /tmp/mock.sock");
        assert_eq!(Port::Named("8080".into()).tcp_port(), Some(8080));
        assert_eq!(Port::Named("/tmp/mock.sock".into()).tcp_port(), None);
    }

    #[test]
    fn test_defaults_from_minimal_toml() {
        let config: ServerConfig = toml::from_str(
            r#"
            [[apis]]
            url = "/user"
            type = "mock"
            data = "hello"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "");
        assert_eq!(config.port, Port::Number(3000));
        assert!(config.cors.is_none());
        assert_eq!(config.apis.len(), 1);
        assert_eq!(config.apis[0].method, "get");
        assert_eq!(config.apis[0].data, Value::String("hello".into()));
    }

    #[test]
    fn test_string_list_forms() {
        let joined = StringList::Joined("GET, POST,,PUT".into());
        assert_eq!(joined.items(), vec!["GET", "POST", "PUT"]);

        let list = StringList::List(vec!["x-a".into(), " x-b ".into()]);
        assert_eq!(list.items(), vec!["x-a", "x-b"]);
    }

    #[test]
    fn test_empty_cors_is_disabled() {
        let cors = CorsConfig::default();
        assert!(!cors.is_enabled());

        let cors = CorsConfig {
            origin: Some(OriginSetting::Enabled(false)),
            ..Default::default()
        };
        assert!(!cors.is_enabled());

        let cors = CorsConfig {
            credentials: Some(false),
            ..Default::default()
        };
        assert!(cors.is_enabled());
    }
}
