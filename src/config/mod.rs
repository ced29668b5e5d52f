// Configuration module entry point
// Builds the fixed startup configuration and the shared application state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::StartupError;

// Re-export public types
pub use state::AppState;
pub use types::{AssetsConfig, Config, ServerConfig};

impl Config {
    /// Assemble the configuration from compiled-in defaults.
    ///
    /// No file or environment source is consulted: the port and the
    /// directory probe are fixed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.public_host", "localhost")?
            .set_default("server.backlog", 128)?
            .set_default("server.header_read_timeout", 30)?
            .set_default("assets.module_dir", env!("CARGO_PKG_NAME"))?
            .set_default("assets.subdir", "static")?
            .set_default("assets.index_file", "index.html")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, StartupError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| StartupError::Address { addr, source })
    }

    /// URL announced at startup, e.g. `http://localhost:8080`
    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.server.public_host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.assets.module_dir, "dev-server");
        assert_eq!(cfg.assets.subdir, "static");
        assert_eq!(cfg.assets.index_file, "index.html");
    }

    #[test]
    fn test_bind_addr() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.bind_addr().unwrap(), "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let mut cfg = Config::load().unwrap();
        cfg.server.host = "not a host".to_string();
        assert!(matches!(
            cfg.bind_addr(),
            Err(StartupError::Address { .. })
        ));
    }

    #[test]
    fn test_public_url() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.public_url(), "http://localhost:8080");
    }
}
