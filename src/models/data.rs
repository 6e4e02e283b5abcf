//! Record model.

use serde::{Deserialize, Serialize};

/// A record returned by the external endpoint.
///
/// Both fields are required on the wire; a payload missing either one fails
/// to decode instead of producing an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    /// The record identifier.
    pub id: String,

    /// Display name of the record.
    pub name: String,
}

impl Data {
    /// Create a record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
