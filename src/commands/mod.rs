//! Command implementations for prompter.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the project context they share: the loaded config
//! and a linker over the prompts directory.

mod build;
mod check;
mod deps;
mod flags;


use crate::builder::{Builder, Parameters};
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{PrompterError, Result};
use crate::linker::Linker;
use crate::pattern::is_identifier;
use crate::store::FsStore;
use std::path::Path;
use tracing::debug;

pub use build::cmd_build;
pub use check::cmd_check;
pub use deps::cmd_deps;
pub use flags::cmd_flags;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let project = Project::open(&cli.config)?;

    match cli.command {
        Command::Build(args) => cmd_build(&project, args),
        Command::Deps(args) => cmd_deps(&project, args),
        Command::Flags(args) => cmd_flags(&project, args),
        Command::Check => cmd_check(&project),
    }
}

/// Loaded configuration plus a linker over the prompts directory.
#[derive(Debug)]
pub struct Project {
    pub config: Config,
    pub linker: Linker<FsStore>,
}

impl Project {
    /// Load `config_path` and root the content store at its prompts directory.
    pub fn open(config_path: &Path) -> Result<Self> {
        let config = Config::load(config_path)?;
        let root = config.prompts_root(config_path);

        if !root.is_dir() {
            return Err(PrompterError::ConfigError(format!(
                "prompts directory not found at '{}'",
                root.display()
            )));
        }

        debug!(root = %root.display(), templates = config.templates.len(), "project loaded");
        let mapping = config.template_map()?;
        let linker = Linker::new(FsStore::new(root), mapping);
        Ok(Self { config, linker })
    }

    /// A builder using the configured entry kind.
    pub fn builder(&self) -> Builder<'_, FsStore> {
        Builder::new(&self.linker).with_entry_kind(self.config.entry_kind.clone())
    }
}

/// Parse `key=value` arguments into build parameters.
///
/// Values may contain `=`; keys must match `[A-Za-z0-9_]+` and may not repeat.
pub fn parse_params(pairs: &[String]) -> Result<Parameters> {
    let mut params = Parameters::new();

    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            PrompterError::UserError(format!(
                "invalid parameter '{}': expected KEY=VALUE",
                pair
            ))
        })?;

        if !is_identifier(key) {
            return Err(PrompterError::UserError(format!(
                "invalid parameter name '{}': must match [A-Za-z0-9_]+",
                key
            )));
        }

        if params.insert(key.to_string(), value.to_string()).is_some() {
            return Err(PrompterError::UserError(format!(
                "parameter '{}' given more than once",
                key
            )));
        }
    }

    Ok(params)
}
