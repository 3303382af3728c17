//! Photobook stand-in `/ajax` server
//!
//! Run with: cargo run --bin photobook-api
//!
//! # Configuration
//!
//! Read from the first of `<config dir>/photobook/config.toml`,
//! `/etc/photobook/config.toml`, `./config.toml`, then overridden by:
//! - `PHOTOBOOK_HOST`: Host to bind to (default: 127.0.0.1)
//! - `PHOTOBOOK_PORT`: Port to listen on (default: 8080)
//! - `PHOTOBOOK_STATIC_DIR`: Directory served under /static
//! - `PHOTOBOOK_LOG_LEVEL`, `PHOTOBOOK_LOG_FORMAT`
//! - `RUST_LOG`: Log filter (wins over the configured level)

use photobook::api::{serve, AppState};
use photobook::config::Config;
use photobook::diagnostics::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting Photobook stand-in server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Answering menus for role {:?}", config.server.role);
    if let Some(dir) = &config.server.static_dir {
        tracing::info!("Serving static files from {:?}", dir);
    }

    serve(AppState::new(config.server.clone()), &config.server).await?;

    tracing::info!("Photobook stand-in server stopped");
    Ok(())
}
