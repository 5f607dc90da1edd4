//! Local Development File Server
//!
//! Serves the contents of a directory over HTTP for local web-app testing,
//! with client-side caching disabled and cross-origin access allowed.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────┐
//!                    │              DEV FILE SERVER               │
//!                    │                                            │
//!   Client Request   │  ┌──────────┐     ┌─────────────────────┐ │
//!   ─────────────────┼─▶│ listener │────▶│ header middleware    │ │
//!                    │  └──────────┘     └──────────┬──────────┘ │
//!                    │                              │             │
//!                    │                              ▼             │
//!                    │                   ┌─────────────────────┐ │
//!   Client Response  │                   │ static file service │ │
//!   ◀────────────────┼───────────────────│     (ServeDir)      │ │
//!                    │                   └─────────────────────┘ │
//!                    │                                            │
//!                    │  Cross-cutting: config, observability      │
//!                    └───────────────────────────────────────────┘
//! ```
//!
//! Every response, whatever its status, leaves the server with caching
//! disabled (`Cache-Control`, `Pragma`, `Expires`) and cross-origin access
//! allowed (`Access-Control-Allow-Origin: *`). File lookup, MIME inference,
//! and error status mapping are delegated to `tower_http::services::ServeDir`.

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
