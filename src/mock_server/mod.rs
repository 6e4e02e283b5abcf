//! Mock record endpoint for E2E testing.
//!
//! An in-memory axum server that answers `GET /?id=<id>` the way the real
//! endpoint does. Unlike wiremock, which mocks at the HTTP level per test,
//! this server keeps state across requests and counts them.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use external::mock_server::MockServer;
//! use external::{Context, Fetch, Fetcher};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let fetcher = Fetcher::with_client(
//!         server.url(),
//!         reqwest::Client::new(),
//!         Duration::from_secs(1),
//!     )
//!     .unwrap();
//!
//!     // Server comes with default fixtures
//!     let data = fetcher.fetch_data(&Context::background(), "mock").await.unwrap();
//!     assert_eq!(data.name, "mock");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{Fixtures, MOCK_ID};
pub use server::MockServer;
pub use state::{CannedResponse, MockState};
