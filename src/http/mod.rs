//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from specific business logic.

pub mod mime;
pub mod response;

use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;

/// Unified response body type.
///
/// Streaming file bodies carry `std::io::Error`; fixed-text error bodies are
/// infallible and get mapped into the same type.
pub type ResponseBody = BoxBody<Bytes, std::io::Error>;

/// Build a fixed, fully-buffered body (error texts, small payloads)
pub fn full_body<T: Into<Bytes>>(chunk: T) -> ResponseBody {
    Full::new(chunk.into()).map_err(|e| match e {}).boxed()
}

// Re-export commonly used builders
pub use response::{
    build_400_response, build_404_response, build_500_response, build_file_response,
};
