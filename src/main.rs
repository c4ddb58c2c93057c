use std::sync::Arc;

use hearth::config::Config;
use hearth::files::ContentCache;
use hearth::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let cache = Arc::new(ContentCache::new());

    tokio::select! {
        res = server::listener::run(&cfg, Arc::clone(&cache)) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    let entries = cache.len().await;
    tracing::info!(entries, "Releasing content cache");
    cache.clear().await;

    Ok(())
}
