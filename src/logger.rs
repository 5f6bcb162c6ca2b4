//! Console logging module
//!
//! Info and access lines go to stdout, errors and warnings to stderr.
//! Access and error lines carry a local timestamp.

use chrono::Local;
use hyper::{Method, StatusCode, Uri, Version};
use std::net::SocketAddr;

use crate::config;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr) {
    println!("======================================");
    println!("File download server started");
    println!("Listening on: http://{addr}");
    println!("Serving files from: ./{}/", config::FILES_DIR);
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[{}] [Connection] Accepted from: {peer_addr}", timestamp());
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[{}] [Request] {method} {uri} {version:?}", timestamp());
}

pub fn log_response(status: StatusCode) {
    println!("[{}] [Response] {status}", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!(
        "[{}] [ERROR] Failed to serve connection: {err:?}",
        timestamp()
    );
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [ERROR] {message}", timestamp());
}
