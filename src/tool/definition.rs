// ABOUTME: Defines ToolDefinition - the name/description/schema triple a
// ABOUTME: harness hands to an LLM when advertising available tools.

use serde::{Deserialize, Serialize};

use super::Tool;

/// Tool definition as advertised to an LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Build a definition from a tool's metadata.
    pub fn from_tool(tool: &dyn Tool) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            input_schema: tool.schema(),
        }
    }
}
