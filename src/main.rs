use std::process::ExitCode;

use dev_server::{logger, resolver, server, Config, StartupError};

fn main() -> ExitCode {
    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

fn start() -> Result<(), StartupError> {
    let cfg = Config::load()?;
    let static_dir = resolver::resolve_static_dir(&cfg.assets)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(StartupError::Runtime)?;

    runtime.block_on(server::run(cfg, static_dir))
}
