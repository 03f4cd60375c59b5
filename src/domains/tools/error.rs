//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool dispatch and execution.
///
/// None of these are fatal: the dispatcher renders every variant into an
/// error-flagged response and the server keeps serving.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// The arguments failed schema validation.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool started executing but failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// A fault that carries no usable detail.
    #[error("Unknown error occurred")]
    Unknown,
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }
}
