//! Request routing for the served tree
//!
//! Decides between a directory index, file content and an error response for
//! each parsed request.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use anyhow::Context;
use futures::FutureExt;

use crate::files::{ContentCache, PathResolver};
use crate::http::mime::content_type_for;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::server::listing;

/// Serves files and directory listings below a fixed root.
pub struct StaticHandler {
    resolver: PathResolver,
    cache: Arc<ContentCache>,
}

impl StaticHandler {
    pub fn new(resolver: PathResolver, cache: Arc<ContentCache>) -> Self {
        Self { resolver, cache }
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Produces the response for one request.
    ///
    /// Always yields a response: internal failures and panics are logged and
    /// answered with a generic 500.
    pub async fn handle(&self, request: &Request) -> Response {
        recover(request, self.serve(request)).await
    }

    async fn serve(&self, request: &Request) -> anyhow::Result<Response> {
        // A request line without a target names nothing.
        if request.path.is_empty() {
            return Ok(Response::not_found());
        }

        let Some(resolved) = self.resolver.resolve(&request.path) else {
            tracing::warn!(path = %request.path, "Rejected path outside root");
            return Ok(Response::forbidden());
        };

        if !tokio::fs::try_exists(&resolved).await.unwrap_or(false) {
            return Ok(Response::not_found());
        }

        let metadata = tokio::fs::metadata(&resolved)
            .await
            .with_context(|| format!("failed to stat {}", resolved.display()))?;
        let file_type = metadata.file_type();

        if file_type.is_dir() {
            let html = listing::render(&request.path, &resolved).await?;
            return Ok(Response::ok("text/html", html));
        }

        if file_type.is_file() {
            let content_type = content_type_for(&resolved);

            return Ok(match self.cache.get_or_read(&resolved, content_type).await {
                Some(lookup) => Response::ok(content_type, lookup.content),
                None => Response::internal_error(),
            });
        }

        tracing::warn!(path = %resolved.display(), "Unsupported file type");
        Ok(Response::internal_error())
    }
}

/// Awaits `serving`, turning an error or a panic into a logged 500.
async fn recover<F>(request: &Request, serving: F) -> Response
where
    F: Future<Output = anyhow::Result<Response>>,
{
    match AssertUnwindSafe(serving).catch_unwind().await {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            tracing::error!(
                method = %request.method,
                path = %request.path,
                error = %format!("{e:#}"),
                "Failed to handle request"
            );
            Response::internal_error()
        }
        Err(_) => {
            tracing::error!(
                method = %request.method,
                path = %request.path,
                "Handler panicked"
            );
            Response::internal_error()
        }
    }
}
