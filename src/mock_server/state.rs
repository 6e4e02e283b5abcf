//! Mock server state management.
//!
//! Provides the in-memory data store for the mock endpoint.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::Data;

/// A fixed response served for one identifier, bypassing the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body; not required to be valid JSON.
    pub body: String,
}

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Records indexed by id.
    pub records: HashMap<String, Data>,

    /// Canned responses indexed by id. Checked before `records`.
    pub canned: HashMap<String, CannedResponse>,

    /// Delay applied before answering any request with an id.
    pub delay: Option<Duration>,

    /// Number of record requests received.
    pub hits: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a record to the state.
    pub fn with_record(mut self, record: Data) -> Self {
        self.records.insert(record.id.clone(), record);
        self
    }

    /// Serve `status` and `body` verbatim for `id`.
    pub fn with_canned(mut self, id: &str, status: u16, body: &str) -> Self {
        self.canned.insert(
            id.to_string(),
            CannedResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Delay every answer by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get a record by id.
    pub fn get_record(&self, id: &str) -> Option<&Data> {
        self.records.get(id)
    }

    /// Get the canned response for an id.
    pub fn get_canned(&self, id: &str) -> Option<&CannedResponse> {
        self.canned.get(id)
    }
}
