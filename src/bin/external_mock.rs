//! Standalone mock record server.
//!
//! Serves the default fixtures on `127.0.0.1:$PORT` (default 3000).

use external::mock_server::MockServer;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;

    let server = MockServer::with_listener(listener, MockServer::default_state());
    tracing::info!(url = server.url(), "mock server listening");
    server.wait().await;
    Ok(())
}
