//! Fetch trait for retrieving single records.

use async_trait::async_trait;

use crate::context::Context;
use crate::error::Result;
use crate::models::Data;

/// Fetch a single record by identifier.
///
/// [`Fetcher`](crate::Fetcher) is the HTTP implementation. Code that only
/// needs records can depend on `dyn Fetch` and be handed a fake in tests.
///
/// # Example
///
/// ```ignore
/// use external::{Context, Fetch};
///
/// async fn lookup(source: &dyn Fetch, id: &str) -> external::Result<String> {
///     let data = source.fetch_data(&Context::background(), id).await?;
///     Ok(data.name)
/// }
/// ```
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch the record identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, the transport fails,
    /// `ctx` is cancelled or times out, the server answers with anything but
    /// 200 OK, or the body is not a valid record.
    async fn fetch_data(&self, ctx: &Context, id: &str) -> Result<Data>;
}
