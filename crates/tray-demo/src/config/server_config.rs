use crate::config::default_port;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Embedded web server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port on 127.0.0.1 for the embedded web server (0 = any free port).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Serve the front-end from this directory instead of the embedded copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            assets_dir: None,
        }
    }
}
