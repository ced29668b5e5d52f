// Server module entry point
// Binds the listener, announces it and serves connections

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the module is named server_loop
#[path = "loop.rs"]
pub mod server_loop;

use std::sync::Arc;

use crate::config::{AppState, Config};
use crate::error::StartupError;
use crate::logger;
use crate::resolver::StaticDir;

// Re-export commonly used items
pub use listener::bind_listener;
pub use server_loop::serve;

/// Bind the configured address and serve `static_dir` until the process
/// is killed.
///
/// Only returns on a bind failure.
pub async fn run(config: Config, static_dir: StaticDir) -> Result<(), StartupError> {
    let addr = config.bind_addr()?;
    let listener = bind_listener(addr, config.server.backlog)?;

    logger::log_server_start(&config.public_url());
    logger::log_serving_dir(&static_dir);

    let state = Arc::new(AppState::new(config, static_dir));
    serve(listener, state).await;
    Ok(())
}
