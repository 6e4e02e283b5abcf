//! External record fetch client.
//!
//! Retrieves a single record from a remote HTTP endpoint by identifier,
//! bounded by a per-call timeout, and classifies every failure.
//!
//! # Quick Start
//!
//! ```no_run
//! use external::{Context, Fetch, Fetcher};
//!
//! #[tokio::main]
//! async fn main() -> external::Result<()> {
//!     // Create fetcher from environment variables
//!     let fetcher = Fetcher::from_env()?;
//!
//!     match fetcher.fetch_data(&Context::background(), "mock").await {
//!         Ok(data) => println!("{}: {}", data.id, data.name),
//!         Err(e) if e.status() == Some(404) => println!("no such record"),
//!         Err(e) => return Err(e),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Fetch`] - Fetch a single record by id
//! - [`Fetcher`] - The HTTP implementation of [`Fetch`]
//! - [`Transport`] - The "execute one request" capability a fetcher sends through
//! - [`Context`] - Cancellation and deadline for one call
//!
//! A call sends exactly one `GET <base_url>/?id=<id>`, with the id
//! percent-encoded. Nothing is retried or cached.
//!
//! # Configuration
//!
//! [`Fetcher::from_env`] reads:
//!
//! - `EXTERNAL_API_URL` (required) - Base URL of the endpoint
//! - `EXTERNAL_TIMEOUT_MS` (optional) - Per-call timeout, defaults to 1000

pub mod cli;
mod config;
mod context;
mod error;
mod fetcher;
mod models;
pub mod output;
mod traits;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use config::{Config, API_URL_VAR, DEFAULT_TIMEOUT, TIMEOUT_MS_VAR};
pub use context::{Context, ContextError};
pub use error::{FetchError, Result};
pub use fetcher::Fetcher;
pub use transport::Transport;

// Re-export traits
pub use traits::Fetch;

// Re-export models
pub use models::Data;
