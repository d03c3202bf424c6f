// ABOUTME: Mock tools used as fixtures by agent end-to-end tests.
// ABOUTME: Each exposes a plain function plus a Tool wrapper around it.

use std::sync::Arc;

use crate::tool::Tool;

mod custom;
mod move_to_agent;
mod move_to_location;
mod start_conversation;
mod string_utils;
mod wave_at;

pub use custom::{E2eCustomTool, e2e_custom_tool};
pub use move_to_agent::{MoveToAgentTool, move_to_agent};
pub use move_to_location::{MoveToLocationTool, move_to_location};
pub use start_conversation::{StartConversationTool, start_conversation};
pub use string_utils::{E2eStringUtilsTool, StringAction, e2e_string_utils};
pub use wave_at::{WaveAtTool, wave_at};

/// Every fixture tool, ready to register.
pub fn all_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(E2eCustomTool),
        Arc::new(MoveToAgentTool),
        Arc::new(MoveToLocationTool),
        Arc::new(StartConversationTool),
        Arc::new(WaveAtTool),
        Arc::new(E2eStringUtilsTool),
    ]
}
