//! Folio Server - HTTP surface for the Folio article backend
//!
//! # API Endpoints
//!
//! - `GET /article?name=X` - Raw article markup (`text/plain`)
//! - `GET /listings` - JSON array of `{name, title, date, keywords}`
//! - `POST /publish?name=X&token=T` - Create or replace an article; the body
//!   is the markup and `T` is `hex(sha256(secret + name))`
//! - `GET /health` - Liveness probe
//! - `GET /metrics` - Prometheus metrics
//!
//! Any other path is served from the configured public directory, with
//! `index.html` for directories.
//!
//! # Quick Start
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

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use auth::{publish_token, verify_publish_token};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
