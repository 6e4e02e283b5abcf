//! HTTP transport seam.
//!
//! The fetcher only needs one capability from its HTTP stack: execute a
//! request and hand back the response. Connection pooling, TLS, proxies and
//! the rest stay inside the implementation.

use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// Executes a single HTTP request.
///
/// Implementations must be safe to share across concurrent calls.
/// Dropping the returned future must abort the request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the response head; the body is read lazily.
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error>;
}

#[async_trait]
impl Transport for Client {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        Client::execute(self, request).await
    }
}
