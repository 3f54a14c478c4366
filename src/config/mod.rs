//! Host and panel configuration.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LifecycleConfig, PanelConfig, SourceConfig};
