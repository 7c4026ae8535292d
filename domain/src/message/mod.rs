//! Conversation message model and history augmentation.

pub mod entities;
pub mod history;

pub use entities::{FunctionCall, Message, Role, ToolCallDescriptor};
pub use history::{append_tool_exchange, correlation_violations};
