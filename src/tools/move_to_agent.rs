// ABOUTME: MoveToAgentTool - reports moving to another agent.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Move to another agent's location.
pub fn move_to_agent(agent_name: &str) -> String {
    format!("Moved to {}.", agent_name)
}

/// Tool wrapper for [`move_to_agent`].
pub struct MoveToAgentTool;

#[async_trait]
impl Tool for MoveToAgentTool {
    fn name(&self) -> &str {
        "move_to_agent"
    }

    fn description(&self) -> &str {
        "Move to another agent's location."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "agent_name": {
                    "type": "string",
                    "description": "Name of the agent to move to"
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

        Ok(ToolResult::text(move_to_agent(&params.agent_name)))
    }
}
