//! Configuration for getset.
//!
//! This crate provides:
//! - Parsing and validation of `getset.toml`
//! - Discovery of the configuration file from a working directory upward
//! - User-defined templates, registered after the built-ins

mod settings;
mod templates;

pub use settings::{ConfigError, Settings, CONFIG_FILE};
pub use templates::UserTemplate;
