#[cfg(feature = "cli")]
pub mod cli;

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Resolved settings handed to the HTTP layer at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Directory holding `gemini/` and `cassandra-diff/` artifact trees.
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn new(data_path: impl Into<PathBuf>, bind_addr: SocketAddr) -> Self {
        Self {
            data_path: data_path.into(),
            bind_addr,
        }
    }
}
