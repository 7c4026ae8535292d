//! Domain layer for toolweave
//!
//! This crate contains the core types and pure logic of the tool-calling
//! middleware. It has no dependencies on infrastructure or transport concerns.
//!
//! # Core Concepts
//!
//! ## Intent
//!
//! A structured `{tool_name, parameters}` pair extracted from free-text model
//! output. A single resolver response may carry zero, one, or many intents.
//!
//! ## Correlation
//!
//! Every tool invocation gets a fresh correlation identifier. When the
//! exchange is persisted, the identifier links the assistant tool-call
//! message to the tool-result message that follows it — the correlation
//! invariant the history augmenter must never violate.

pub mod intent;
pub mod message;
pub mod prompt;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use intent::{
    ResolvedIntent,
    parser::{parse_intent_response, parse_single_intent},
};
pub use message::{
    entities::{FunctionCall, Message, Role, ToolCallDescriptor},
    history::{append_tool_exchange, correlation_violations},
};
pub use prompt::ToolPromptTemplate;
pub use tool::{
    entities::{ToolMetadata, ToolParameter, ToolSpec},
    value_objects::{InvocationError, InvocationErrorKind, InvocationOutcome, ToolCallRecord},
};
