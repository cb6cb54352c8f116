//! Server configuration.

use std::path::PathBuf;

/// HTTP server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Path of the JSON document the todo store persists to.
    pub data_file: PathBuf,
}

impl ServerConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("JOTTER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let data_file = std::env::var("JOTTER_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/todos.json"));

        Self { port, data_file }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            data_file: PathBuf::from("data/todos.json"),
        }
    }
}
