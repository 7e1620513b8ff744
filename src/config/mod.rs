//! Configuration loading and CLI merging

pub mod loader;
pub mod merge;

pub use loader::{load_config, CONFIG_FILE_NAMES, ENV_PREFIX};
pub use merge::{merge_cli_with_config, CliOverrides};
