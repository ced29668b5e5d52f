// Listener module
// Binds the TCP listener the file server accepts on

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::error::StartupError;

/// Create a `TcpListener` bound to `addr`.
///
/// `SO_REUSEADDR` lets a restarted server reclaim a port left in
/// `TIME_WAIT`; a port held by a live listener still fails to bind.
/// `SO_REUSEPORT` is left off for the same reason.
///
/// Must be called from within a Tokio runtime.
pub fn bind_listener(addr: SocketAddr, backlog: i32) -> Result<TcpListener, StartupError> {
    create_listener(addr, backlog).map_err(|source| StartupError::Bind { addr, source })
}

fn create_listener(addr: SocketAddr, backlog: i32) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(backlog)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
