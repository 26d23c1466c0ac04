//! Configuration loading for liveqa
//!
//! Process-wide settings are merged from several sources.
//! The priority order (highest to lowest):
//!
//! 1. `LIVEQA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./liveqa.toml` or `./.liveqa.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/liveqa/config.toml`
//! 5. Default values
//!
//! Each answer producer is described by its own JSON file
//! ([`ProducerDescriptor`]) listed under `producers`.

mod descriptor;
mod error;
mod file_config;
mod loader;

pub use descriptor::ProducerDescriptor;
pub use error::ConfigError;
pub use file_config::{ConfigValidationError, FileConfig};
pub use loader::ConfigLoader;
