//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses as a socket address
//! - Check the serving root exists and is a directory
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs once at startup, before the listener is bound

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A semantic configuration error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bind address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("serving root '{0}' does not exist or is not a directory")]
    InvalidServingRoot(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if !config.files.root.is_dir() {
        errors.push(ValidationError::InvalidServingRoot(
            config.files.root.display().to_string(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        // Default root is "." which exists wherever the tests run.
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.files.root = "/definitely/not/a/real/directory".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_bad_bind_address_is_rejected() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "localhost:eight-thousand".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidBindAddress(_)));
    }
}
