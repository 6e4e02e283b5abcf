//! HTTP record fetcher.
//!
//! Performs exactly one round trip per call: build the request, execute it
//! under a bounded context, check the status, decode the body.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Request, StatusCode};
use url::Url;

use crate::config::Config;
use crate::context::Context;
use crate::error::{FetchError, Result};
use crate::models::Data;
use crate::traits::Fetch;
use crate::transport::Transport;

const USER_AGENT: &str = concat!("external/", env!("CARGO_PKG_VERSION"));

/// Fetches records from an external HTTP endpoint.
///
/// Configuration is fixed at construction. The fetcher holds no per-call
/// state, so a single instance can serve any number of concurrent callers.
/// Clones share the same transport.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use external::{Context, Fetch, Fetcher};
///
/// # async fn example() -> external::Result<()> {
/// let fetcher = Fetcher::with_client(
///     "http://localhost:3000",
///     reqwest::Client::new(),
///     Duration::from_secs(1),
/// )?;
///
/// let data = fetcher.fetch_data(&Context::background(), "mock").await?;
/// println!("{}", data.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Fetcher {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("base_url", &&*self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Fetcher {
    /// Create a fetcher from environment variables.
    ///
    /// See [`Config::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is missing or invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::from_env()?)
    }

    /// Create a fetcher backed by a fresh `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or the HTTP client cannot be
    /// built.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(FetchError::Transport)?;

        Self::with_client(&config.base_url, client, config.timeout)
    }

    /// Create a fetcher that sends requests through an existing `reqwest`
    /// client.
    pub fn with_client(base_url: &str, client: Client, timeout: Duration) -> Result<Self> {
        Self::new(base_url, Arc::new(client), timeout)
    }

    /// Create a fetcher over any [`Transport`].
    ///
    /// The base URL is not parsed here; a malformed one surfaces from
    /// [`Fetch::fetch_data`] as [`FetchError::InvalidRequest`].
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is zero.
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, timeout: Duration) -> Result<Self> {
        Config::new(base_url).with_timeout(timeout).validate()?;

        Ok(Self {
            base_url: Arc::from(base_url),
            transport,
            timeout,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build `<base_url>/?id=<id>` with `id` percent-encoded.
    pub fn record_url(&self, id: &str) -> Result<Url> {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        let url = Url::parse(&format!("{base}/?id={}", urlencoding::encode(id)))?;
        Ok(url)
    }
}

#[async_trait]
impl Fetch for Fetcher {
    #[tracing::instrument(skip(self, ctx), fields(base_url = %self.base_url))]
    async fn fetch_data(&self, ctx: &Context, id: &str) -> Result<Data> {
        let scope = ctx.with_timeout(self.timeout);
        let _release = scope.release_on_drop();

        let url = self.record_url(id)?;
        tracing::debug!(%url, "sending request");
        let request = Request::new(Method::GET, url);

        let response = scope.run(self.transport.execute(request)).await??;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");
        if status != StatusCode::OK {
            return Err(FetchError::response_not_ok(status));
        }

        let body = scope.run(response.bytes()).await??;
        Ok(serde_json::from_slice(&body)?)
    }
}
