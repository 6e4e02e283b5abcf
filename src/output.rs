//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::Data;

/// Trait for human-readable key-value output.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Data {
    fn pretty_print(&self) -> String {
        let header = format!("Record: {}", self.id);
        let divider = "─".repeat(header.chars().count().max(30));

        [header, divider, format!("Name:           {}", self.name)].join("\n")
    }
}
