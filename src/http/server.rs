//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router backed by the static file service
//! - Wire up middleware (header augmentation, trace)
//! - Bind server to listener and serve until the process is interrupted

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::middleware::headers::augment_response_headers;

/// HTTP server for the dev file server.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// `ServeDir` is the fallback service so every path reaches it; the
    /// header middleware wraps it so every response it produces (including
    /// 404s and method rejections) is augmented.
    fn build_router(config: &ServerConfig) -> Router {
        let files = ServeDir::new(&config.files.root)
            .append_index_html_on_directories(config.files.index_on_directories);

        Router::new()
            .fallback_service(files)
            .layer(axum::middleware::from_fn(augment_response_headers))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until the process is interrupted; a local dev tool has no
    /// draining step.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            root = %self.config.files.root.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
