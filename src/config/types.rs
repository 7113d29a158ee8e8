//! Configuration types and defaults for prompter.
//!
//! This module defines the mapping-table record type, constants, and default
//! value functions used by the Config struct.

use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "prompter.yaml";

/// Default prompts directory, relative to the config file.
pub const DEFAULT_PROMPTS_DIR: &str = "prompts";

/// Default flag kind used to resolve top-level template names.
pub const DEFAULT_ENTRY_KIND: &str = "symbol";

/// One record of the template mapping table.
///
/// ```yaml
/// - flag_name: symbol
///   var_name: beginning
///   template: agents/{agent_name}/beginning.md
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagTemplate {
    /// Flag kind (the `symbol` in `@__symbol__:beginning`).
    #[serde(alias = "kind")]
    pub flag_name: String,

    /// Flag variable (the `beginning` in `@__symbol__:beginning`).
    #[serde(alias = "variable")]
    pub var_name: String,

    /// Path pattern, possibly with `{param}` placeholders.
    #[serde(alias = "pattern")]
    pub template: String,
}

impl FlagTemplate {
    /// Convenience constructor.
    pub fn new(
        flag_name: impl Into<String>,
        var_name: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            flag_name: flag_name.into(),
            var_name: var_name.into(),
            template: template.into(),
        }
    }
}

// Default value functions for serde
pub(super) fn default_prompts_dir() -> String {
    DEFAULT_PROMPTS_DIR.to_string()
}

pub(super) fn default_entry_kind() -> String {
    DEFAULT_ENTRY_KIND.to_string()
}
