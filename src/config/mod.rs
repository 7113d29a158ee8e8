//! Configuration model for prompter.
//!
//! This module defines the Config struct that represents `prompter.yaml`:
//! where templates live, which flag kind names top-level templates, and the
//! template mapping table. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), defaults for optional fields, and
//! validation of the mapping table.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{DEFAULT_CONFIG_FILE, DEFAULT_ENTRY_KIND, DEFAULT_PROMPTS_DIR, FlagTemplate};
