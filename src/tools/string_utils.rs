// ABOUTME: E2eStringUtilsTool - applies a named transformation to text.
// ABOUTME: Supports reverse, uppercase, lowercase and length; rejects the rest.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::error::ToolError;
use crate::tool::{Tool, ToolResult};

/// A transformation understood by [`e2e_string_utils`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringAction {
    Reverse,
    Uppercase,
    Lowercase,
    Length,
}

impl StringAction {
    pub const ALL: [StringAction; 4] = [
        StringAction::Reverse,
        StringAction::Uppercase,
        StringAction::Lowercase,
        StringAction::Length,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StringAction::Reverse => "reverse",
            StringAction::Uppercase => "uppercase",
            StringAction::Lowercase => "lowercase",
            StringAction::Length => "length",
        }
    }

    /// Apply this action to `text`. Reverse and length work on chars.
    pub fn apply(&self, text: &str) -> String {
        match self {
            StringAction::Reverse => text.chars().rev().collect(),
            StringAction::Uppercase => text.to_uppercase(),
            StringAction::Lowercase => text.to_lowercase(),
            StringAction::Length => text.chars().count().to_string(),
        }
    }
}

impl fmt::Display for StringAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringAction {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StringAction::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ToolError::InvalidParams(format!("Unknown action: {}", s)))
    }
}

/// Perform `action` on `text`.
///
/// Fails with [`ToolError::InvalidParams`] when `action` is not one of
/// `reverse`, `uppercase`, `lowercase` or `length`.
pub fn e2e_string_utils(action: &str, text: &str) -> Result<String, ToolError> {
    let action = action.parse::<StringAction>().inspect_err(|_| {
        warn!(action, "unknown string action");
    })?;
    Ok(action.apply(text))
}

/// Tool wrapper for [`e2e_string_utils`].
pub struct E2eStringUtilsTool;

#[async_trait]
impl Tool for E2eStringUtilsTool {
    fn name(&self) -> &str {
        "e2e_string_utils"
    }

    fn description(&self) -> &str {
        "String utility tool for e2e testing."
    }

    fn schema(&self) -> serde_json::Value {
        let actions: Vec<_> = StringAction::ALL.iter().map(|a| a.as_str()).collect();
        serde_json::json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": actions,
                    "description": "The action to perform (reverse, uppercase, lowercase, length)"
                },
                "text": {
                    "type": "string",
                    "description": "The text to process"
                }
            },
            "required": ["action", "text"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            action: String,
            text: String,
        }
        let params: Params = serde_json::from_value(params)?;

        let output = e2e_string_utils(&params.action, &params.text)?;
        Ok(ToolResult::text(output).with_metadata("action", &params.action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(e2e_string_utils("reverse", "hello").unwrap(), "olleh");
        assert_eq!(e2e_string_utils("reverse", "").unwrap(), "");
        assert_eq!(e2e_string_utils("reverse", "héllo🚀").unwrap(), "🚀olléh");
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        for text in ["", "a", "abc def", "ünïcödé", "multi\nline"] {
            let once = e2e_string_utils("reverse", text).unwrap();
            assert_eq!(e2e_string_utils("reverse", &once).unwrap(), text);
        }
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(e2e_string_utils("uppercase", "Hello").unwrap(), "HELLO");
        assert_eq!(e2e_string_utils("lowercase", "HeLLo").unwrap(), "hello");
        assert_eq!(e2e_string_utils("uppercase", "straße").unwrap(), "STRASSE");
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(e2e_string_utils("length", "abc").unwrap(), "3");
        assert_eq!(e2e_string_utils("length", "").unwrap(), "0");
        assert_eq!(e2e_string_utils("length", "héllo").unwrap(), "5");
    }

    #[test]
    fn test_unknown_action() {
        let err = e2e_string_utils("bogus", "x").unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams(_)));
        assert_eq!(err.to_string(), "Invalid parameters: Unknown action: bogus");
    }

    #[test]
    fn test_action_is_case_sensitive() {
        assert!(e2e_string_utils("Reverse", "x").is_err());
        assert!(e2e_string_utils(" length", "x").is_err());
    }

    #[test]
    fn test_action_parse_roundtrip() {
        for action in StringAction::ALL {
            assert_eq!(action.to_string().parse::<StringAction>().unwrap(), action);
        }
    }

    #[tokio::test]
    async fn test_execute_records_action() {
        let result = E2eStringUtilsTool
            .execute(serde_json::json!({"action": "uppercase", "text": "abc"}))
            .await
            .unwrap();

        assert_eq!(result.content, "ABC");
        assert_eq!(result.metadata["action"], "uppercase");
    }

    #[tokio::test]
    async fn test_execute_unknown_action_downcasts() {
        let err = E2eStringUtilsTool
            .execute(serde_json::json!({"action": "bogus", "text": "x"}))
            .await
            .unwrap_err();

        let tool_err = err.downcast_ref::<ToolError>().unwrap();
        assert!(matches!(tool_err, ToolError::InvalidParams(_)));
    }

    #[test]
    fn test_schema_lists_actions() {
        let schema = E2eStringUtilsTool.schema();
        assert_eq!(
            schema["properties"]["action"]["enum"],
            serde_json::json!(["reverse", "uppercase", "lowercase", "length"])
        );
    }
}
