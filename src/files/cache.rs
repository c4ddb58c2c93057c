//! In-memory file content cache
//!
//! A read-through cache keyed by resolved filesystem path. Every hit is
//! revalidated with a fresh `stat`: an entry is served only while the file's
//! modification time still equals the one recorded when it was read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

use bytes::Bytes;
use tokio::sync::RwLock;

/// Cached contents of one file.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub content: Bytes,
    pub size: usize,
    pub mtime: SystemTime,
    pub content_type: String,
}

/// Result of [`ContentCache::get_or_read`].
#[derive(Debug, Clone)]
pub struct CacheLookup {
    pub content: Bytes,
    pub size: usize,
    pub mtime: SystemTime,
    /// `true` when served from memory without reading file content
    pub from_cache: bool,
}

/// Process-wide content cache shared by all connections.
///
/// Unbounded; entries only leave when their file becomes inaccessible or
/// [`clear`](Self::clear) is called. No lock is held while the filesystem is
/// touched, so two concurrent misses on one path both read the file and the
/// last store wins.
#[derive(Debug, Default)]
pub struct ContentCache {
    entries: RwLock<HashMap<PathBuf, CacheEntry>>,
    disk_reads: AtomicU64,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns file content for `path`, from memory when still fresh.
    ///
    /// Returns `None` if the file cannot be read or stat'ed; callers map that
    /// to a server error.
    pub async fn get_or_read(&self, path: &Path, content_type: &str) -> Option<CacheLookup> {
        let cached = self.entries.read().await.get(path).cloned();

        if let Some(entry) = cached {
            match modified(path).await {
                Ok(mtime) if mtime == entry.mtime => {
                    tracing::debug!(path = %path.display(), "cache hit");
                    return Some(CacheLookup {
                        content: entry.content,
                        size: entry.size,
                        mtime: entry.mtime,
                        from_cache: true,
                    });
                }
                Ok(_) => {
                    tracing::debug!(path = %path.display(), "cache entry stale");
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "evicting unreadable entry");
                    self.entries.write().await.remove(path);
                }
            }
        }

        self.read_fresh(path, content_type).await
    }

    async fn read_fresh(&self, path: &Path, content_type: &str) -> Option<CacheLookup> {
        self.disk_reads.fetch_add(1, Ordering::Relaxed);

        let content = match tokio::fs::read(path).await {
            Ok(content) => Bytes::from(content),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read file");
                return None;
            }
        };

        let mtime = match modified(path).await {
            Ok(mtime) => mtime,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to stat file");
                return None;
            }
        };

        let entry = CacheEntry {
            size: content.len(),
            content: content.clone(),
            mtime,
            content_type: content_type.to_string(),
        };
        self.entries.write().await.insert(path.to_path_buf(), entry);

        Some(CacheLookup {
            size: content.len(),
            content,
            mtime,
            from_cache: false,
        })
    }

    /// Returns a copy of the entry stored for `path`, without revalidation.
    pub async fn get(&self, path: &Path) -> Option<CacheEntry> {
        self.entries.read().await.get(path).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of times file content has been read from disk.
    pub fn disk_reads(&self) -> u64 {
        self.disk_reads.load(Ordering::Relaxed)
    }
}

async fn modified(path: &Path) -> std::io::Result<SystemTime> {
    tokio::fs::metadata(path).await?.modified()
}
