use std::collections::HashMap;

use bytes::Bytes;

use crate::http::request::Request;

pub(crate) const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Parses one request frame.
///
/// Never fails: a short request line leaves the missing fields empty, header
/// lines without a colon are skipped, and duplicate header names keep the
/// last value. Anything after the first `\r\n\r\n` becomes the body.
pub fn parse_http_request(frame: &[u8]) -> Request {
    let (header_bytes, body_bytes) = match find_headers_end(frame) {
        Some(end) => (&frame[..end], &frame[end + HEADER_TERMINATOR.len()..]),
        None => (frame, &[][..]),
    };

    let headers_str = String::from_utf8_lossy(header_bytes);
    let mut lines = headers_str.split("\r\n");

    // Request line
    let mut parts = lines.next().unwrap_or_default().split(' ');
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();
    let version = parts.next().unwrap_or_default().to_string();

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            break;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    Request {
        method,
        path,
        version,
        headers,
        body: Bytes::copy_from_slice(body_bytes),
    }
}

pub(crate) fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_http_request(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");

        assert_eq!(req.path, "/");
        assert_eq!(req.headers.get("Host").unwrap(), "example.com");
        assert!(req.body.is_empty());
    }

    #[test]
    fn find_headers_end_locates_first_terminator() {
        assert_eq!(find_headers_end(b"A\r\n\r\nB\r\n\r\n"), Some(1));
        assert_eq!(find_headers_end(b"A\r\n\r"), None);
    }
}
