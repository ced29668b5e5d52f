// Configuration types module
// Defines the startup configuration data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Interface the listener binds to
    pub host: String,
    pub port: u16,
    /// Host name printed in the startup URL
    pub public_host: String,
    /// Accept queue length passed to `listen(2)`
    pub backlog: i32,
    /// Seconds a connection may take to send request headers
    pub header_read_timeout: u64,
}

/// Static directory lookup configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory probed first when launched from the parent of the project
    pub module_dir: String,
    /// Name of the directory holding the served files
    pub subdir: String,
    /// File served in place of a directory listing
    pub index_file: String,
}
