// Connection handling module
// Accepts and serves a single TCP connection

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::handler;
use crate::logger;

/// Accept a connection and serve it on its own task.
///
/// The handler is stateless, so connections share nothing; a failure on one
/// connection never affects another.
pub fn accept_connection(stream: tokio::net::TcpStream, peer_addr: std::net::SocketAddr) {
    logger::log_connection_accepted(&peer_addr);
    handle_connection(stream);
}

/// Serve a single connection in a spawned task.
///
/// Wraps the TCP stream in `TokioIo`, builds an HTTP/1.1 connection with
/// keep-alive, and drives the request handler. Connection-level errors
/// (including a streamed body failing mid-transfer) are logged and the
/// connection is dropped.
fn handle_connection(stream: tokio::net::TcpStream) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service_fn(handler::handle_request));

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
