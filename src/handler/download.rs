//! Download handler module
//!
//! Maps a request path to a file directly inside the served directory and
//! streams it back, or answers with a terminal error status.

use std::path::Path;

use futures_util::TryStreamExt;
use http_body_util::{BodyExt, StreamBody};
use hyper::body::Frame;
use hyper::Response;
use tokio::fs;
use tokio_util::io::ReaderStream;

use super::path;
use crate::http::{self, mime, ResponseBody};
use crate::logger;

/// Read-buffer size for the file-to-socket relay
const CHUNK_SIZE: usize = 64 * 1024;

/// Produce exactly one response for a request path.
///
/// Pipeline: normalization check, base-name resolution against `files_dir`,
/// metadata check, content-type selection, streaming 200. Every failure
/// path is terminal (400, 404, or 500); nothing is retried.
pub async fn serve(url_path: &str, files_dir: &Path) -> Response<ResponseBody> {
    // Traversal detector: a path that changes under normalization carried
    // `.`/`..` segments or doubled separators.
    if !path::is_normalized(url_path) {
        return http::build_400_response();
    }

    // Only the base name is honored, so the candidate always sits directly
    // inside the served directory regardless of the requested nesting.
    let name = path::base_name(url_path);
    let candidate = files_dir.join(name);

    let metadata = match fs::metadata(&candidate).await {
        Ok(m) => m,
        Err(_) => return http::build_404_response(),
    };
    // A directory (including the served directory itself for "/") stats
    // fine but cannot be read as a byte stream, so it falls in the same
    // fault class as an open failure.
    if !metadata.is_file() {
        logger::log_error(&format!(
            "Not a regular file: '{}'",
            candidate.display()
        ));
        return http::build_500_response();
    }

    let content_type = mime::get_content_type(candidate.extension().and_then(|e| e.to_str()));

    let file = match fs::File::open(&candidate).await {
        Ok(f) => f,
        Err(e) => {
            logger::log_error(&format!("Failed to open '{}': {e}", candidate.display()));
            return http::build_500_response();
        }
    };

    // Bounded-buffer relay; memory use stays at CHUNK_SIZE no matter how
    // large the file is. A read error from here on surfaces as a connection
    // error, since the status line is already committed.
    let stream = ReaderStream::with_capacity(file, CHUNK_SIZE);
    let body = StreamBody::new(stream.map_ok(Frame::data)).boxed();

    http::build_file_response(body, content_type, metadata.len(), name)
}
