//! Bookmatch Server - HTTP API for book recommendations
//!
//! This crate exposes the recommendation pipeline over HTTP:
//!
//! - **Recommendations**: look up a book by title (and optional author),
//!   score catalog candidates against it, and return the top matches with
//!   model-generated explanations
//! - **Plain search**: normalized Open Library search results with work
//!   descriptions and subjects
//! - **Health**: liveness and readiness probes
//!
//! # Features
//!
//! - **Middleware**: compression, CORS, request-id tracking, structured
//!   request logging, per-request timeout
//! - **Configuration**: environment variables (prefix `BOOKMATCH`, `__`
//!   separator) and optional `bookmatch.toml` file
//! - **Error handling**: the public contract only ever sees a flat
//!   `{ "error": ... }` body; internal detail stays in the logs
//! - **Graceful shutdown**: SIGTERM / Ctrl+C handling
//!
//! # Quick start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /api/v1/books/search?title=&author=` - Plain catalog search
//! - `GET /api/v1/books/recommend?title=&author=&diversify=` - Recommendations

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
