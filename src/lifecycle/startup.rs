//! Startup: binding the listen socket.
//!
//! # Responsibilities
//! - Bind the configured TCP port or named pipe (Unix socket)
//! - Classify bind failures: permission denied and address in use are
//!   reported and exit with code 1, anything else propagates as fatal
//! - Report the listening address once bound
//!
//! # Design Decisions
//! - Fail fast: no retry and no fallback port
//! - Routes are validated before this runs, so a bad config never opens a socket

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::net::UnixListener;

use crate::config::ServerConfig;

/// Exit code for classified startup failures.
pub const EXIT_FAILURE: i32 = 1;

/// Error raised while binding the listen socket.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{bind} requires elevated privileges")]
    PermissionDenied { bind: String },

    #[error("{bind} is already in use")]
    AddrInUse { bind: String },

    #[error("failed to listen on {bind}: {source}")]
    Io {
        bind: String,
        #[source]
        source: io::Error,
    },
}

impl StartupError {
    fn classify(bind: String, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => StartupError::PermissionDenied { bind },
            io::ErrorKind::AddrInUse => StartupError::AddrInUse { bind },
            _ => StartupError::Io { bind, source },
        }
    }

    /// Exit code for classified failures; `None` means the error is fatal
    /// and should propagate unchanged.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            StartupError::PermissionDenied { .. } | StartupError::AddrInUse { .. } => {
                Some(EXIT_FAILURE)
            }
            StartupError::Io { .. } => None,
        }
    }
}

/// A bound listen socket.
#[derive(Debug)]
pub enum BoundListener {
    Tcp(TcpListener),
    #[cfg(unix)]
    Unix { listener: UnixListener, path: PathBuf },
}

impl BoundListener {
    /// Line printed once the server is ready.
    pub fn listening_message(&self) -> String {
        match self {
            BoundListener::Tcp(listener) => match listener.local_addr() {
                Ok(addr) => format!(
                    "Listening on port {0}. http://localhost:{0}",
                    addr.port()
                ),
                Err(_) => "Listening".to_string(),
            },
            #[cfg(unix)]
            BoundListener::Unix { path, .. } => format!("Listening on pipe {}", path.display()),
        }
    }

    /// TCP port, if bound to one.
    pub fn port(&self) -> Option<u16> {
        match self {
            BoundListener::Tcp(listener) => listener.local_addr().ok().map(|addr| addr.port()),
            #[cfg(unix)]
            BoundListener::Unix { .. } => None,
        }
    }
}

/// Bind the listen socket described by `config`.
pub async fn bind(config: &ServerConfig) -> Result<BoundListener, StartupError> {
    let label = config.port.bind_label();
    tracing::debug!(bind = %label, host = %config.host, "Binding listener");

    let listener = match config.port.tcp_port() {
        Some(port) => TcpListener::bind((config.host.as_str(), port))
            .await
            .map(BoundListener::Tcp)
            .map_err(|e| StartupError::classify(label.clone(), e))?,
        None => bind_pipe(&config.port.to_string(), label.clone())?,
    };

    tracing::info!(bind = %label, "Listener bound");
    Ok(listener)
}

#[cfg(unix)]
fn bind_pipe(path: &str, label: String) -> Result<BoundListener, StartupError> {
    let path = PathBuf::from(path);
    UnixListener::bind(&path)
        .map(|listener| BoundListener::Unix { listener, path })
        .map_err(|e| StartupError::classify(label, e))
}

#[cfg(not(unix))]
fn bind_pipe(_path: &str, label: String) -> Result<BoundListener, StartupError> {
    Err(StartupError::Io {
        bind: label,
        source: io::Error::new(io::ErrorKind::Unsupported, "named pipes need a Unix platform"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Port;

    fn config_for(port: Port) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind(&config_for(Port::Number(0))).await.unwrap();
        let port = listener.port().unwrap();
        assert_ne!(port, 0);
        assert_eq!(
            listener.listening_message(),
            format!("Listening on port {0}. http://localhost:{0}", port)
        );
    }

    #[tokio::test]
    async fn test_second_bind_is_address_in_use() {
        let first = bind(&config_for(Port::Number(0))).await.unwrap();
        let port = first.port().unwrap();

        let err = bind(&config_for(Port::Number(port))).await.unwrap_err();
        assert!(matches!(err, StartupError::AddrInUse { .. }));
        assert_eq!(err.to_string(), format!("Port {} is already in use", port));
        assert_eq!(err.exit_code(), Some(1));
    }

    #[tokio::test]
    async fn test_numeric_string_port_binds_tcp() {
        let first = bind(&config_for(Port::Number(0))).await.unwrap();
        let port = first.port().unwrap();

        let err = bind(&config_for(Port::Named(port.to_string()))).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Pipe {} is already in use", port));
    }

    #[test]
    fn test_classification() {
        let err = StartupError::classify(
            "Port 80".into(),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.to_string(), "Port 80 requires elevated privileges");
        assert_eq!(err.exit_code(), Some(1));

        let err = StartupError::classify("Port 80".into(), io::Error::from(io::ErrorKind::Other));
        assert_eq!(err.exit_code(), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_bind_pipe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mock.sock");
        let config = config_for(Port::Named(path.display().to_string()));

        let listener = bind(&config).await.unwrap();
        assert!(listener.listening_message().contains("pipe"));

        let err = bind(&config).await.unwrap_err();
        assert!(matches!(err, StartupError::AddrInUse { .. }));

        drop(listener);
    }
}
