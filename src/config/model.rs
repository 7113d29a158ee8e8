//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for prompter.
///
/// This struct represents the contents of `prompter.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the template files, relative to the config file.
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: String,

    /// Flag kind under which top-level template names are looked up.
    #[serde(default = "default_entry_kind")]
    pub entry_kind: String,

    /// The template mapping table.
    #[serde(default)]
    pub templates: Vec<FlagTemplate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompts_dir: default_prompts_dir(),
            entry_kind: default_entry_kind(),
            templates: Vec::new(),
        }
    }
}
