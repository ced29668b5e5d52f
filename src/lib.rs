//! Development static file server.
//!
//! Resolves a `static` directory with a short fallback probe and serves its
//! contents read-only over HTTP/1.1.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod resolver;
pub mod server;

pub use crate::config::{AppState, Config};
pub use crate::error::StartupError;
pub use crate::resolver::StaticDir;
