// ABOUTME: StartConversationTool - opens a conversation with another agent.
// ABOUTME: Takes both the target agent and the opening message.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Report a conversation opened with `agent_name` using `message`.
pub fn start_conversation(agent_name: &str, message: &str) -> String {
    format!("Started conversation with {}: {}", agent_name, message)
}

/// Tool wrapper for [`start_conversation`].
pub struct StartConversationTool;

#[async_trait]
impl Tool for StartConversationTool {
    fn name(&self) -> &str {
        "start_conversation"
    }

    fn description(&self) -> &str {
        "Start a conversation with another agent."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "agent_name": {
                    "type": "string",
                    "description": "Name of the agent to talk to"
                },
                "message": {
                    "type": "string",
                    "description": "Opening message"
                }
            },
            "required": ["agent_name", "message"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            agent_name: String,
            message: String,
        }
        let params: Params = serde_json::from_value(params)?;

        Ok(ToolResult::text(start_conversation(
            &params.agent_name,
            &params.message,
        )))
    }
}
