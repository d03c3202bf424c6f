// ABOUTME: Defines ToolResult - what a fixture hands back to the harness.
// ABOUTME: Serializes to the JSON envelope printed by `e2e-tools call --json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of a tool call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: String,

    #[serde(default)]
    pub is_error: bool,

    /// Extra facts about the call, e.g. which string action ran.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl ToolResult {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
            ..Self::default()
        }
    }

    /// Attach a metadata entry. Values that fail to serialize are skipped.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), v);
        }
        self
    }
}
