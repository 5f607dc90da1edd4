//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup: trace → header middleware → ServeDir)
//!     → ServeDir resolves the path, builds status/body/content headers
//!     → middleware/headers.rs appends the fixed dev-server headers
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use server::HttpServer;
