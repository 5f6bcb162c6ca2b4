//! HTTP response building module
//!
//! Provides builders for the status code responses this server emits,
//! decoupled from the request handling logic.

use hyper::Response;

use super::{full_body, ResponseBody};

/// Build 400 Bad Request response for a non-normalized path
pub fn build_400_response() -> Response<ResponseBody> {
    Response::builder()
        .status(400)
        .body(full_body("invalid path"))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(full_body("invalid path"))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<ResponseBody> {
    Response::builder()
        .status(404)
        .body(full_body("not found"))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(full_body("not found"))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<ResponseBody> {
    Response::builder()
        .status(500)
        .body(full_body("server error"))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(full_body("server error"))
        })
}

/// Build the 200 download response.
///
/// `Content-Length` comes from the metadata obtained before the file was
/// opened; `Content-Disposition` forces a download prompt under the file's
/// own name.
pub fn build_file_response(
    body: ResponseBody,
    content_type: &str,
    content_length: u64,
    filename: &str,
) -> Response<ResponseBody> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header(
            "Content-Disposition",
            format!("attachment; filename={filename}"),
        )
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(full_body(""))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
