//! Middleware for the dev file server.

pub mod headers;
