// Configuration module entry point
// Holds the runtime configuration: listening port and served-files directory

use std::net::{Ipv6Addr, SocketAddr};
use std::path::Path;

/// Directory whose immediate files are eligible for download
pub const FILES_DIR: &str = "files";

const DEFAULT_PORT: u16 = 8080;

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    /// Load configuration from the command line.
    ///
    /// Accepts a single optional positional argument: the listening port.
    /// An omitted, empty, or `0` argument falls back to the default port;
    /// anything unparsable is a startup error.
    pub fn load() -> Result<Self, String> {
        Self::from_arg(std::env::args().nth(1).as_deref())
    }

    fn from_arg(arg: Option<&str>) -> Result<Self, String> {
        let port = match arg {
            None | Some("" | "0") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("Invalid port '{raw}': {e}"))?,
        };
        Ok(Self {
            server: ServerConfig { port },
        })
    }

    /// Bind address: IPv6 loopback on the configured port
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv6Addr::LOCALHOST, self.server.port))
    }
}

/// Served-files directory as a path
pub fn files_dir() -> &'static Path {
    Path::new(FILES_DIR)
}
