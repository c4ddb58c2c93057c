//! Serving logic
//!
//! The accept loop, the request handler that maps requests onto the served
//! tree, directory index rendering and the access log hand-off.

pub mod access_log;
pub mod handler;
pub mod listener;
pub mod listing;

pub use handler::StaticHandler;
pub use listener::Server;
