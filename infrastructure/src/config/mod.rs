//! Configuration file loading.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileEventsConfig, FileGatewayConfig, FileHandlerConfig};
pub use loader::ConfigLoader;
