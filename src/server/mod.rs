// Server module entry point
// Listener construction and the accept loop

pub mod connection;
pub mod listener;

pub use listener::create_listener;

use tokio::net::TcpListener;

use crate::logger;

/// Accept loop: dispatch every inbound connection to its own task.
///
/// Accept errors are logged and the loop continues; only a failed bind
/// (before this point) terminates the process.
pub async fn run(listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::accept_connection(stream, peer_addr);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
