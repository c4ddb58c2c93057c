use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::files::{ContentCache, PathResolver};
use crate::http::connection::Connection;
use crate::server::handler::StaticHandler;

/// A bound listener plus the handler shared by its connections.
pub struct Server {
    listener: TcpListener,
    handler: Arc<StaticHandler>,
}

impl Server {
    /// Captures the root directory and binds the configured address.
    pub async fn bind(cfg: &Config, cache: Arc<ContentCache>) -> anyhow::Result<Self> {
        let root = cfg.root_dir()?;
        let addr = cfg.listen_addr();

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("Listening on {}", listener.local_addr()?);
        info!("Serving files from {}", root.display());

        let handler = Arc::new(StaticHandler::new(PathResolver::new(root), cache));
        Ok(Self { listener, handler })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, one task each.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!("Failed to accept connection: {}", e);
                    continue;
                }
            };
            tracing::debug!("Accepted connection from {}", peer);

            let handler = Arc::clone(&self.handler);
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, Some(peer), handler);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

pub async fn run(cfg: &Config, cache: Arc<ContentCache>) -> anyhow::Result<()> {
    Server::bind(cfg, cache).await?.run().await
}
