//! Infrastructure layer for toolweave
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the OpenAI-compatible completion gateway, the
//! in-memory tool registry with closure-backed callables, the JSONL event
//! sink, and configuration file loading.

pub mod config;
pub mod events;
pub mod logging;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use events::JsonlEventSink;
pub use providers::{OpenAiCompatConfig, OpenAiCompatGateway};
pub use tools::{FunctionTool, InMemoryToolRegistry};
