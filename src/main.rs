//! Binary entrypoint for the dev file server.
//!
//! Startup order: logging first, then configuration, then the listener.
//! Any bind or validation failure is fatal before the server starts
//! accepting traffic.

use tokio::net::TcpListener;

use devserve::config::validation::validate_config;
use devserve::config::ServerConfig;
use devserve::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    devserve::observability::logging::init();

    tracing::info!("devserve v0.1.0 starting");

    // Fixed defaults: port 8000 on all interfaces, serving the current
    // directory. The binary takes no flags or arguments.
    let config = ServerConfig::default();

    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            tracing::error!(%error, "Invalid configuration");
        }
        return Err("configuration validation failed".into());
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        root = %config.files.root.display(),
        "Configuration loaded"
    );

    // Bind TCP listener; a port conflict surfaces here as a fatal error.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Server started at http://localhost:{}", local_addr.port());
    tracing::info!("Press Ctrl+C to stop");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    Ok(())
}
