#![forbid(unsafe_code)]

//! JSON output formatter for resolved queries

use crate::engine::resolver::QuerySpec;

/// Serializes a resolved query as one pretty-printed JSON object, tagged
/// with its task.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JsonFormatter
    pub fn new() -> Self {
        JsonFormatter
    }

    /// Format the resolved query as pretty-printed JSON
    pub fn format(&self, spec: &QuerySpec) -> String {
        serde_json::to_string_pretty(spec).unwrap_or_default()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
