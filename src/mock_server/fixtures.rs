//! Test data fixtures for the mock server.

use crate::Data;

/// Id of the record present in the default scenario.
pub const MOCK_ID: &str = "mock";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// The record every default server knows: `{"id":"mock","name":"mock"}`.
    pub fn mock_record() -> Data {
        Data::new(MOCK_ID, MOCK_ID)
    }

    /// Create a record whose name is derived from its id.
    pub fn named_record(id: &str) -> Data {
        Data::new(id, format!("Record {id}"))
    }

    /// Records served by [`MockServer::start`](super::MockServer::start).
    pub fn default_scenario() -> Vec<Data> {
        vec![
            Self::mock_record(),
            Self::named_record("alpha"),
            Self::named_record("with space&amp"),
        ]
    }
}
