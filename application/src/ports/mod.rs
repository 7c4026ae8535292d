//! Port definitions for the application layer.
//!
//! Ports are the interfaces the middleware needs from its collaborators:
//! a completion provider for the auxiliary task-model call, a read-only
//! tool registry, and an event channel for citation/status notifications.
//! Implementations (adapters) live in the infrastructure layer or are
//! supplied by the embedding application.

pub mod completion_gateway;
pub mod event_sink;
pub mod tool_registry;

pub use completion_gateway::{CompletionGateway, GatewayError};
pub use event_sink::{EventSink, NoEventSink, ToolEvent};
pub use tool_registry::{RegisteredTool, ToolCallable, ToolRegistryPort};
