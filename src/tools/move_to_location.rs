// ABOUTME: MoveToLocationTool - reports moving to a named location.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Move to a specified location.
pub fn move_to_location(location: &str) -> String {
    format!("Moved to {}.", location)
}

/// Tool wrapper for [`move_to_location`].
pub struct MoveToLocationTool;

#[async_trait]
impl Tool for MoveToLocationTool {
    fn name(&self) -> &str {
        "move_to_location"
    }

    fn description(&self) -> &str {
        "Move to a specified location."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "Name of the location to move to"
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            location: String,
        }
        let params: Params = serde_json::from_value(params)?;

        Ok(ToolResult::text(move_to_location(&params.location)))
    }
}
