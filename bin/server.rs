// Time Allocation Analyzer - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use time_allocation::{api, init_tracing, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(false);

    let config = ServerConfig::from_env();
    let app = api::router();

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.addr))?;

    info!(addr = %config.addr, "server listening");
    println!("🚀 Server running on http://{}", config.addr);
    println!("   API: POST http://{}/api/analyze", config.addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
