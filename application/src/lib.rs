//! Application layer for toolweave
//!
//! This crate contains use cases, port definitions, and the handler
//! configuration. It depends only on the domain layer.
//!
//! The entry point is [`ToolCompletionUseCase`]: given a conversation
//! history, a tool registry, and a [`ToolHandlerConfig`], it resolves tool
//! intents through the task model, invokes the chosen tools, emits
//! citation/status events, and — under the persistence policy — weaves the
//! tool-call/tool-result exchange back into the history.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ToolHandlerConfig;
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    event_sink::{EventSink, NoEventSink, ToolEvent},
    tool_registry::{RegisteredTool, ToolCallable, ToolRegistryPort},
};
pub use use_cases::handle_tools::{ToolCompletionUseCase, ToolHandlerOutput};
pub use use_cases::invoke_tool::ToolInvoker;
pub use use_cases::resolve_intents::IntentResolver;
