//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log filter configurable through RUST_LOG, with a debug default
//!   suited to local development

pub mod logging;
