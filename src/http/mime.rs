//! MIME type detection based on file extensions.

use std::path::Path;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Returns the `Content-Type` for a file, keyed by its lower-cased extension.
///
/// # Example
///
/// ```
/// # use hearth::http::mime::content_type_for;
/// assert_eq!(content_type_for("index.HTML"), "text/html; charset=utf-8");
/// assert_eq!(content_type_for("archive.bin"), "application/octet-stream");
/// ```
pub fn content_type_for(path: impl AsRef<Path>) -> &'static str {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("md") => "text/markdown",
        Some("xml") => "application/xml",
        Some("jsx" | "tsx" | "ts") => "text/javascript",

        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("pdf") => "application/pdf",

        _ => DEFAULT_CONTENT_TYPE,
    }
}
