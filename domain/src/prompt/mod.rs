//! Prompt templates for the intent resolver.

pub mod template;

pub use template::ToolPromptTemplate;
