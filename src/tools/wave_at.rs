// ABOUTME: WaveAtTool - waves at another agent.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Wave at another agent.
pub fn wave_at(agent_name: &str) -> String {
    format!("You waved at {}.", agent_name)
}

/// Tool wrapper for [`wave_at`].
pub struct WaveAtTool;

#[async_trait]
impl Tool for WaveAtTool {
    fn name(&self) -> &str {
        "wave_at"
    }

    fn description(&self) -> &str {
        "Wave at another agent."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "agent_name": {
                    "type": "string",
                    "description": "Name of the agent to wave at"
                }
            },
            "required": ["agent_name"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            agent_name: String,
        }
        let params: Params = serde_json::from_value(params)?;

        Ok(ToolResult::text(wave_at(&params.agent_name)))
    }
}
