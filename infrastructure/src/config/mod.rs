//! Configuration file loading for study-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./study-assistant.toml` or `./.study-assistant.toml`
//! 3. Global: `<config dir>/study-assistant/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileGenerationConfig, FileOllamaConfig, FileOutputConfig,
    FileOutputFormat, FileSamplingConfig, Severity,
};
pub use loader::ConfigLoader;
