// ABOUTME: Defines all error types for the e2e-tools library using thiserror.
// ABOUTME: Tool failures are unified under E2eError.

/// Top-level error type for the e2e-tools library.
#[derive(Debug, thiserror::Error)]
pub enum E2eError {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from tool operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Execution failed: {0}")]
    Execution(#[source] anyhow::Error),
}

impl From<anyhow::Error> for E2eError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ToolError>() {
            Ok(tool_err) => E2eError::Tool(tool_err),
            Err(err) => match err.downcast::<serde_json::Error>() {
                Ok(json_err) => E2eError::Json(json_err),
                Err(err) => E2eError::Tool(ToolError::Execution(err)),
            },
        }
    }
}
