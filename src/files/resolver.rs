//! Request path resolution
//!
//! Turns a request target into an absolute path under the served root,
//! refusing anything that normalizes to a location outside it.

use std::path::{Component, Path, PathBuf};

/// Resolves request paths against a fixed root directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Creates a resolver for `root`, which must be an absolute path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a raw request target to an absolute filesystem path.
    ///
    /// The query string is dropped, the remainder is joined onto the root and
    /// normalized lexically (`.` removed, `..` applied). Returns `None` when
    /// the normalized path escapes the root.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::files::PathResolver;
    /// let resolver = PathResolver::new("/srv/www");
    /// assert!(resolver.resolve("/../../etc/passwd").is_none());
    /// assert_eq!(
    ///     resolver.resolve("/docs/./a.txt?v=1").unwrap(),
    ///     std::path::Path::new("/srv/www/docs/a.txt"),
    /// );
    /// ```
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let clean = strip_query(request_path);
        let normalized = normalize(&self.root.join(clean.trim_start_matches('/')));

        // Component-wise prefix check on the normalized path, never on the raw string.
        if normalized.starts_with(&self.root) {
            Some(normalized)
        } else {
            None
        }
    }
}

/// Returns everything before the first `?`.
pub fn strip_query(request_path: &str) -> &str {
    match request_path.split_once('?') {
        Some((path, _)) => path,
        None => request_path,
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }

    out
}
