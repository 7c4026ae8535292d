//! Tool registry and callable adapters.

pub mod function_tool;
pub mod registry;

pub use function_tool::FunctionTool;
pub use registry::InMemoryToolRegistry;
