// Application state module
// Immutable values shared by every connection

use super::types::Config;
use crate::resolver::StaticDir;

/// Application state
///
/// Built once at startup and shared behind an `Arc`; nothing in it changes
/// while the server runs.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub static_dir: StaticDir,
}

impl AppState {
    pub const fn new(config: Config, static_dir: StaticDir) -> Self {
        Self { config, static_dir }
    }
}
