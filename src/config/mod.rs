//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig::default()  (fixed dev-server behavior)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → passed by value into HttpServer::new
//! ```
//!
//! # Design Decisions
//! - No config file, flags, or environment lookup: the binary takes no
//!   input. The schema exists so the fixed values are explicit, typed,
//!   and overridable in tests.
//! - Config is immutable once constructed
//! - Validation separates syntactic (serde) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::FileServingConfig;
pub use schema::ListenerConfig;
pub use schema::ServerConfig;
