//! HTTP protocol implementation.
//!
//! This module turns the raw bytes of a TCP connection into responses,
//! without any HTTP library underneath.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Per-connection loop driving framing, handling and writing
//! - **`framer`**: Splits the byte stream into request frames at `\r\n\r\n`
//! - **`parser`**: Parses one frame into a [`request::Request`]
//! - **`request`**: HTTP request representation
//! - **`response`**: Status codes and the serialized response builder
//! - **`writer`**: Writes serialized responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Append incoming bytes to the framer
//!        └──────┬──────┘
//!               │ Bytes received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Serve every complete frame, in order
//!        └──────┬───────────┘
//!               │
//!               ├─ Nothing answered, or bytes left over → Reading
//!               └─ Responses written, framer empty → Closed
//! ```
//!
//! Pipelined requests are answered in the order they were sent, including
//! ones split across reads. Peer EOF discards any unfinished frame. Every
//! response carries `Connection: close`.

pub mod connection;
pub mod framer;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
