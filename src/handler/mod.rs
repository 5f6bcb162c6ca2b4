//! Request handler module
//!
//! Entry point for HTTP request processing: one inbound request, one
//! terminal response.

pub mod download;
pub mod path;

use std::convert::Infallible;

use hyper::body::Incoming;
use hyper::{Request, Response};

use crate::config;
use crate::http::ResponseBody;
use crate::logger;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
) -> Result<Response<ResponseBody>, Infallible> {
    logger::log_request(req.method(), req.uri(), req.version());

    let response = download::serve(req.uri().path(), config::files_dir()).await;

    logger::log_response(response.status());
    Ok(response)
}
