//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use mock_api_server::config::{load_config, Port};
use mock_api_server::http::MockServer;
use mock_api_server::lifecycle::{self, Shutdown};
use mock_api_server::ServerConfig;
use tempfile::TempDir;

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// The fixture config, rebound to an ephemeral loopback port.
pub fn fixture_config() -> ServerConfig {
    loopback_config(&fixtures_dir().join("config.toml"))
}

/// Load `path` and rebind it to an ephemeral loopback port.
pub fn loopback_config(path: &Path) -> ServerConfig {
    let mut config = load_config(path).unwrap();
    config.host = "127.0.0.1".to_string();
    config.port = Port::Number(0);
    config
}

/// A running server and the handle that stops it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Bind `config` and serve it in the background.
pub async fn start_server(config: ServerConfig) -> TestServer {
    let server = MockServer::new(config).unwrap();
    let listener = lifecycle::bind(server.config()).await.unwrap();
    let port = listener.port().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr: SocketAddr::from(([127, 0, 0, 1], port)),
        shutdown,
    }
}

/// Write `content` to `config.toml` in a fresh temp dir. The file lives
/// until the returned `TempDir` is dropped.
pub fn scratch_config(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
