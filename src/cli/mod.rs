//! CLI argument parsing for prompter.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Prompter: assemble prompt documents from reusable template fragments.
///
/// Templates reference each other through flags like `@__symbol__:intro`
/// and take caller values through `@__parameter__:name`. The mapping from
/// flags to template files lives in `prompter.yaml`.
#[derive(Parser, Debug)]
#[command(name = "prompter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prompter.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a template into its fully expanded text.
    ///
    /// Checks required parameters first, then resolves every flag
    /// recursively. Output goes to stdout unless `--output` is given.
    Build(BuildArgs),

    /// Show the dependency analysis of a template.
    ///
    /// Lists required parameters and the template patterns it references.
    Deps(DepsArgs),

    /// List the flags found in a template file.
    ///
    /// The path is relative to the prompts directory.
    Flags(FlagsArgs),

    /// Check every top-level template for missing files and unmapped flags.
    Check,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Template name (looked up under the configured entry kind).
    pub template: String,

    /// Parameter value, repeatable.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `deps` command.
#[derive(Parser, Debug)]
pub struct DepsArgs {
    /// Template name (looked up under the configured entry kind).
    pub template: String,

    /// Parameter value, needed only when the template's own path is parameterized.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Print the dependency record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `flags` command.
#[derive(Parser, Debug)]
pub struct FlagsArgs {
    /// Template path relative to the prompts directory.
    pub path: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
