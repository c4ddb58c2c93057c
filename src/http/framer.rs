//! Request framing
//!
//! Splits a connection's byte stream into request frames. A frame ends at the
//! first `\r\n\r\n`; bytes after it stay buffered for the next frame.
//!
//! `Content-Length` is not consulted. A request body is only framed correctly
//! when it is empty, otherwise its bytes are taken as the start of the next
//! frame. The buffer has no size limit, so a peer that never sends the
//! terminator grows it until the connection closes.

use bytes::{Bytes, BytesMut};

use crate::http::parser::{HEADER_TERMINATOR, find_headers_end};

/// Per-connection accumulator of unframed bytes.
#[derive(Debug)]
pub struct Framer {
    buffer: BytesMut,
}

impl Default for Framer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framer {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(4096),
        }
    }

    /// Appends freshly read bytes.
    pub fn extend(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Removes and returns the next complete frame, terminator included.
    ///
    /// Returns `None` while no terminator is buffered; the partial frame is
    /// kept intact.
    pub fn next_frame(&mut self) -> Option<Bytes> {
        let end = find_headers_end(&self.buffer)? + HEADER_TERMINATOR.len();
        Some(self.buffer.split_to(end).freeze())
    }

    /// Bytes received but not yet part of a complete frame.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
