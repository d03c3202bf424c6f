// ABOUTME: Prelude module - convenient imports for test harnesses.
// ABOUTME: Use `use e2e_tools::prelude::*;` to get started quickly.

pub use crate::error::{E2eError, ToolError};
pub use crate::tool::{Registry, Tool, ToolDefinition, ToolResult};
pub use crate::tools::{
    E2eCustomTool, E2eStringUtilsTool, MoveToAgentTool, MoveToLocationTool,
    StartConversationTool, StringAction, WaveAtTool, all_tools, e2e_custom_tool,
    e2e_string_utils, move_to_agent, move_to_location, start_conversation, wave_at,
};
