//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PrompterError, Result};
use crate::mapping::TemplateMap;
use crate::pattern::is_identifier;
use crate::scanner::PARAMETER_KIND;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the prompter.yaml file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PrompterError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrompterError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            PrompterError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PrompterError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `entry_kind` is a word and not the reserved `parameter` kind
    /// - every `flag_name` / `var_name` matches `[A-Za-z0-9_]+`
    /// - `parameter` is never mapped (parameter flags are substituted directly)
    /// - every `template` parses as a path pattern
    /// - no `(flag_name, var_name)` pair appears twice
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.entry_kind) || self.entry_kind == PARAMETER_KIND {
            return Err(PrompterError::ConfigError(format!(
                "config validation failed: entry_kind '{}' must be a word other than '{}'",
                self.entry_kind, PARAMETER_KIND
            )));
        }

        for entry in &self.templates {
            for (field, value) in [("flag_name", &entry.flag_name), ("var_name", &entry.var_name)] {
                if !is_identifier(value) {
                    return Err(PrompterError::ConfigError(format!(
                        "config validation failed: {} '{}' must match [A-Za-z0-9_]+",
                        field, value
                    )));
                }
            }

            if entry.flag_name == PARAMETER_KIND {
                return Err(PrompterError::ConfigError(format!(
                    "config validation failed: '{}' flags are substituted from build parameters \
                     and cannot be mapped (found mapping for '{}')",
                    PARAMETER_KIND, entry.var_name
                )));
            }
        }

        self.template_map().map(|_| ())
    }

    /// Build the template mapping table from `templates`.
    pub fn template_map(&self) -> Result<TemplateMap> {
        TemplateMap::from_entries(self.templates.iter().map(|t| {
            (
                t.flag_name.as_str(),
                t.var_name.as_str(),
                t.template.as_str(),
            )
        }))
        .map_err(|e| PrompterError::ConfigError(format!("config validation failed: {}", e)))
    }

    /// Resolve `prompts_dir` against the directory containing `config_path`.
    ///
    /// An absolute `prompts_dir` is returned unchanged.
    pub fn prompts_root<P: AsRef<Path>>(&self, config_path: P) -> PathBuf {
        let prompts_dir = Path::new(&self.prompts_dir);
        if prompts_dir.is_absolute() {
            return prompts_dir.to_path_buf();
        }

        config_path
            .as_ref()
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(prompts_dir)
    }
}
