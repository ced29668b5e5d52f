// Server loop module
// Accepts connections until the process is terminated

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config::AppState;
use crate::logger;

const MAX_ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

/// Accept connections forever, one task per connection.
///
/// Accept errors (e.g. file descriptor exhaustion) are logged and retried
/// after a delay that doubles up to one second.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) {
    let mut backoff = Duration::ZERO;
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                backoff = Duration::ZERO;
                handle_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                backoff = if backoff.is_zero() {
                    Duration::from_millis(5)
                } else {
                    (backoff * 2).min(MAX_ACCEPT_BACKOFF)
                };
                logger::log_error(&format!(
                    "Accept error: {e}; retrying in {}ms",
                    backoff.as_millis()
                ));
                tokio::time::sleep(backoff).await;
            }
        }
    }
}
