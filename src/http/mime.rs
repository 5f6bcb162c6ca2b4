//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

/// Get MIME Content-Type based on file extension.
///
/// The table is intentionally small: it covers the download types this
/// server is meant for, and everything else falls back to `text/plain`.
/// New types are added by inserting a match arm, not by new code paths.
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("jpg") => "image/jpeg",
        Some("webm") => "video/webm",
        Some("zip") => "application/zip",
        Some("gz") => "application/gzip",

        // Default
        _ => "text/plain",
    }
}
