//! Application-layer configuration.

pub mod handler_config;

pub use handler_config::ToolHandlerConfig;
