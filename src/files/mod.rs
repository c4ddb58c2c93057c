//! Filesystem access for the served tree
//!
//! Maps request paths onto the root directory and keeps file contents in
//! memory, revalidated against the on-disk modification time.

pub mod cache;
pub mod resolver;

pub use cache::{CacheEntry, CacheLookup, ContentCache};
pub use resolver::PathResolver;
