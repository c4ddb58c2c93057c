use std::net::SocketAddr;
use std::time::Duration;

use crate::http::request::Request;
use crate::http::response::Response;

/// Emits one access event for a fully written response.
///
/// `bytes` is the body length only; formatting is left to the subscriber.
pub fn record(peer: Option<SocketAddr>, request: &Request, response: &Response, elapsed: Duration) {
    let peer = peer.map_or_else(|| "unknown".to_string(), |p| p.to_string());

    tracing::info!(
        peer = %peer,
        method = %request.method,
        path = %request.path,
        version = %request.version,
        status = response.status.as_u16(),
        bytes = response.content_length,
        elapsed_ms = elapsed_millis(elapsed),
        "request served"
    );
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
