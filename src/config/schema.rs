//! Configuration schema definitions.
//!
//! All types derive Serde traits and carry defaults that reproduce the
//! fixed behavior of the shipped binary: listen on all interfaces at port
//! 8000 and serve the current directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the dev file server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Static file serving configuration.
    pub files: FileServingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Static file serving configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FileServingConfig {
    /// Directory whose contents are served.
    pub root: PathBuf,

    /// Serve `index.html` when a directory is requested.
    pub index_on_directories: bool,
}

impl Default for FileServingConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            index_on_directories: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listener_is_port_8000_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
    }

    #[test]
    fn test_default_serving_root_is_current_directory() {
        let config = ServerConfig::default();
        assert_eq!(config.files.root, PathBuf::from("."));
        assert!(config.files.index_on_directories);
    }
}
