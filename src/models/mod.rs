//! Data models for the external endpoint.

mod data;

pub use data::Data;
