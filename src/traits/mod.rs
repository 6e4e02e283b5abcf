//! Trait definitions for record sources.

mod fetch;

pub use fetch::Fetch;
