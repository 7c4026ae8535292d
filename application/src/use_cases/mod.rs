//! Application use cases.

pub mod handle_tools;
pub mod invoke_tool;
pub mod resolve_intents;

pub use handle_tools::{ToolCompletionUseCase, ToolHandlerOutput};
pub use invoke_tool::ToolInvoker;
pub use resolve_intents::IntentResolver;
