//! Startup error type
//!
//! Every variant is fatal: `main` logs it and exits with a failure status.

use std::io;
use std::net::{AddrParseError, SocketAddr};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to get executable path: {0}")]
    ExecutableLocation(#[source] io::Error),

    #[error("Invalid listen address '{addr}': {source}")]
    Address {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Failed to start server: listen tcp {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Failed to build runtime: {0}")]
    Runtime(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let err = StartupError::Bind {
            addr: "0.0.0.0:8080".parse().unwrap(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address already in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("0.0.0.0:8080"));
        assert!(msg.contains("address already in use"));
    }

    #[test]
    fn test_executable_error_message() {
        let err = StartupError::ExecutableLocation(io::Error::other("no /proc"));
        assert_eq!(err.to_string(), "Failed to get executable path: no /proc");
    }
}
