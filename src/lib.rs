//! Hearth - static file server on a raw TCP socket
//!
//! Core library for request framing, parsing, routing and file caching.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
