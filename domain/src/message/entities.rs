//! Message domain entities
//!
//! The conversation-history unit shared with downstream consumers (renderer,
//! next completion call, billing). The serialized shape is the wire-level
//! contract: role-tagged objects where an assistant message that carries
//! `tool_calls` has `content: null`, and a tool message carries the
//! `tool_call_id` of the descriptor it answers.

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// The function half of a tool-call descriptor.
///
/// `arguments` is the JSON-encoded parameter object, mirroring the resolved
/// intent verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// A single tool-call descriptor on an assistant message.
///
/// `id` is the correlation identifier assigned by the invoker; the matching
/// tool-result message carries it as `tool_call_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallDescriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: FunctionCall,
}

impl ToolCallDescriptor {
    /// Create a `type = "function"` descriptor.
    pub fn function(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            call_type: "function".to_string(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// A message in a conversation (Entity)
///
/// `content` is always serialized, including as `null` — downstream consumers
/// must tolerate `content: null` on assistant messages that carry `tool_calls`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCallDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// Assistant message announcing a single tool call.
    ///
    /// Carries `content: null` and exactly one descriptor — pairs are never
    /// batched into one assistant message.
    pub fn tool_call(descriptor: ToolCallDescriptor) -> Self {
        Self {
            role: Role::Assistant,
            content: None,
            tool_calls: Some(vec![descriptor]),
            tool_call_id: None,
        }
    }

    /// Tool-result message answering the descriptor with the given id.
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    /// Whether this is an assistant message carrying tool-call descriptors.
    pub fn is_tool_call(&self) -> bool {
        self.role == Role::Assistant
            && self.tool_calls.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Whether this is a tool-result message.
    pub fn is_tool_result(&self) -> bool {
        self.role == Role::Tool
    }

    /// Content of the most recent user message, if any.
    pub fn last_user_content(messages: &[Message]) -> Option<&str> {
        messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .and_then(|m| m.content.as_deref())
    }
}
