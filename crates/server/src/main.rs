//! Bookmatch Server - HTTP API for book recommendations
//!
//! This binary serves the recommendation pipeline over REST: catalog
//! lookup, keyword extraction, similarity scoring, and explanations.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up GROQ_API_KEY and BOOKMATCH__* overrides from a local .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
