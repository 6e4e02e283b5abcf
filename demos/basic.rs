//! Basic example demonstrating the record fetcher.
//!
//! Run with:
//! ```
//! EXTERNAL_API_URL=http://localhost:3000 cargo run --example basic -- mock
//! ```

use std::time::Duration;

use external::{Context, Fetch, FetchError, Fetcher};

#[tokio::main]
async fn main() -> external::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let id = std::env::args().nth(1).unwrap_or_else(|| "mock".to_string());

    println!("Creating fetcher...");
    let fetcher = Fetcher::from_env()?;
    println!("Endpoint: {} (timeout {:?})", fetcher.base_url(), fetcher.timeout());

    // The caller may impose its own, tighter deadline.
    let ctx = Context::background().with_timeout(Duration::from_secs(5));

    println!("\n--- Fetching '{id}' ---");
    match fetcher.fetch_data(&ctx, &id).await {
        Ok(data) => {
            println!("  ID: {}", data.id);
            println!("  Name: {}", data.name);
        }
        Err(FetchError::ResponseNotOk { status, status_text }) => {
            println!("  Server answered {status} {status_text}");
        }
        Err(e) if e.is_transport() => {
            println!("  Could not reach the endpoint: {e}");
        }
        Err(e) => return Err(e),
    }

    println!("\nDone!");
    Ok(())
}
