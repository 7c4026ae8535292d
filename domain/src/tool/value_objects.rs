//! Tool invocation value objects — immutable record and error types
//!
//! Every invocation settles into a [`ToolCallRecord`]: a correlation
//! identifier, the tool name and parameters from the resolved intent, and an
//! [`InvocationOutcome`] carrying either the callable's value or a captured
//! [`InvocationError`]. Records are ephemeral unless the persistence policy
//! materializes them into the conversation history.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of invocation failure. Both kinds are recorded, never raised: a
/// failed tool loses its augmentation for the turn and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationErrorKind {
    /// The intent named a tool absent from the registry
    UnknownTool,
    /// The callable faulted (or was cancelled) during execution
    ExecutionError,
}

impl InvocationErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            InvocationErrorKind::UnknownTool => "UNKNOWN_TOOL",
            InvocationErrorKind::ExecutionError => "EXECUTION_ERROR",
        }
    }
}

/// Error captured from a tool invocation.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[error("[{}] {message}", .kind.as_str())]
pub struct InvocationError {
    pub kind: InvocationErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl InvocationError {
    pub fn unknown_tool(name: impl AsRef<str>) -> Self {
        Self {
            kind: InvocationErrorKind::UnknownTool,
            message: format!("Tool not found: {}", name.as_ref()),
        }
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self {
            kind: InvocationErrorKind::ExecutionError,
            message: message.into(),
        }
    }

    pub fn cancelled(name: impl AsRef<str>) -> Self {
        Self {
            kind: InvocationErrorKind::ExecutionError,
            message: format!("Invocation of '{}' was cancelled", name.as_ref()),
        }
    }
}

/// Settled result of a tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InvocationOutcome {
    /// The callable's return value, any JSON shape
    Success(serde_json::Value),
    /// A captured failure
    Failure(InvocationError),
}

/// One tool invocation: correlation id, intent, and settled outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRecord {
    /// Correlation identifier, unique within the turn
    pub id: String,
    /// Name of the invoked tool
    pub tool_name: String,
    /// Parameters from the resolved intent, passed through verbatim
    pub parameters: serde_json::Map<String, serde_json::Value>,
    /// Settled result or captured failure
    pub outcome: InvocationOutcome,
}

impl ToolCallRecord {
    /// Generate a fresh correlation identifier.
    ///
    /// Random UUIDs satisfy the uniqueness requirement without coordination;
    /// identifiers the model may have suggested are never trusted.
    pub fn fresh_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    pub fn success(
        id: impl Into<String>,
        tool_name: impl Into<String>,
        parameters: serde_json::Map<String, serde_json::Value>,
        value: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            tool_name: tool_name.into(),
            parameters,
            outcome: InvocationOutcome::Success(value),
        }
    }

    pub fn failure(
        id: impl Into<String>,
        tool_name: impl Into<String>,
        parameters: serde_json::Map<String, serde_json::Value>,
        error: InvocationError,
    ) -> Self {
        Self {
            id: id.into(),
            tool_name: tool_name.into(),
            parameters,
            outcome: InvocationOutcome::Failure(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, InvocationOutcome::Success(_))
    }

    pub fn error(&self) -> Option<&InvocationError> {
        match &self.outcome {
            InvocationOutcome::Failure(e) => Some(e),
            InvocationOutcome::Success(_) => None,
        }
    }

    /// The invocation parameters as a JSON-encoded string, the form embedded
    /// into the tool-call descriptor's `function.arguments`.
    pub fn arguments_json(&self) -> String {
        serde_json::Value::Object(self.parameters.clone()).to_string()
    }

    /// Stringify the outcome for a tool-result message.
    ///
    /// String values embed as-is; other JSON values are serialized; failures
    /// embed their display text.
    pub fn content_string(&self) -> String {
        match &self.outcome {
            InvocationOutcome::Success(serde_json::Value::String(s)) => s.clone(),
            InvocationOutcome::Success(value) => value.to_string(),
            InvocationOutcome::Failure(error) => error.to_string(),
        }
    }
}
