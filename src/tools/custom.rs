// ABOUTME: E2eCustomTool - echoes a message back with an "Echo: " prefix.
// ABOUTME: The simplest fixture; never fails.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Echo `message` back prefixed with `Echo: `.
pub fn e2e_custom_tool(message: &str) -> String {
    format!("Echo: {}", message)
}

/// Tool wrapper for [`e2e_custom_tool`].
pub struct E2eCustomTool;

#[async_trait]
impl Tool for E2eCustomTool {
    fn name(&self) -> &str {
        "e2e_custom_tool"
    }

    fn description(&self) -> &str {
        "A simple test tool that echoes a message."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "The message to echo"
                }
            },
            "required": ["message"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            message: String,
        }
        let params: Params = serde_json::from_value(params)?;

        Ok(ToolResult::text(e2e_custom_tool(&params.message)))
    }
}
