//! Router and lifecycle for the mock record endpoint.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::handlers;
use super::state::MockState;

/// Background axum task answering `GET /?id=` from a [`MockState`].
///
/// Bound to loopback. Point a `Fetcher` at [`MockServer::url`].
pub struct MockServer {
    url: String,
    handle: JoinHandle<()>,
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Serve [`Fixtures::default_scenario`] on an ephemeral port.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Serve no records; any non-empty id answers 404.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Serve `state` on an ephemeral port.
    pub async fn with_state(state: MockState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        Self::with_listener(listener, state)
    }

    /// Serve `state` on a listener the caller already bound.
    pub fn with_listener(listener: TcpListener, state: MockState) -> Self {
        let state = state.shared();
        let router = Self::create_router(Arc::clone(&state));
        let addr = listener.local_addr().expect("listener has a local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server crashed");
        });

        Self {
            url: format!("http://{addr}"),
            handle,
            state,
        }
    }

    /// `http://<addr>` with no trailing slash.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Live state; writes are visible to the next request.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        Arc::clone(&self.state)
    }

    /// Record requests received, including rejected ones.
    pub async fn hits(&self) -> u64 {
        self.state.read().await.hits
    }

    /// Block until the serve task ends.
    pub async fn wait(self) {
        let _ = self.handle.await;
    }

    /// Abort the serve task and wait for it; the port stops accepting.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// State seeded with [`Fixtures::default_scenario`].
    pub fn default_state() -> MockState {
        Fixtures::default_scenario()
            .into_iter()
            .fold(MockState::new(), MockState::with_record)
    }

    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            .route("/", get(handlers::get_record))
            .route("/health", get(handlers::health_check))
            .with_state(state)
    }
}
