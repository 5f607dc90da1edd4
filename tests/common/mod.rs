//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::Path;

use tokio::net::TcpListener;

use devserve::config::ServerConfig;
use devserve::http::HttpServer;

/// Spawn a dev file server serving `root` on an ephemeral loopback port.
///
/// The listener is bound before the task is spawned, so the returned
/// address accepts connections immediately.
pub async fn spawn_server(root: &Path) -> SocketAddr {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.files.root = root.to_path_buf();

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// HTTP client that bypasses any system proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
