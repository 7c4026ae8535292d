//! Tool specifications, metadata, and invocation records.

pub mod entities;
pub mod value_objects;

pub use entities::{ToolMetadata, ToolParameter, ToolSpec};
pub use value_objects::{InvocationError, InvocationErrorKind, InvocationOutcome, ToolCallRecord};
