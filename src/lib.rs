//! Prompter: recursive flag resolution for composable prompt templates.
//!
//! Templates embed flags such as `@__symbol__:beginning` or
//! `@__parameter__:agent_name`. A mapping table sends each non-parameter flag
//! to another template path (possibly containing `{param}` placeholders), and
//! the [`Builder`] stitches the graph together into one text:
//!
//! ```
//! use prompter::{Builder, Linker, MemoryStore, TemplateMap, params};
//!
//! let store = MemoryStore::new()
//!     .with("system.md", "@__symbol__:intro\nBe concise.")
//!     .with("agents/tinia/intro.md", "You are @__parameter__:agent_name.");
//! let mapping = TemplateMap::from_entries([
//!     ("symbol", "system_prompt", "system.md"),
//!     ("symbol", "intro", "agents/{agent_name}/intro.md"),
//! ])
//! .unwrap();
//!
//! let linker = Linker::new(store, mapping);
//! let text = Builder::new(&linker)
//!     .build("system_prompt", &params([("agent_name", "tinia")]))
//!     .unwrap();
//! assert_eq!(text, "You are tinia.\nBe concise.");
//! ```

pub mod builder;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod linker;
pub mod logging;
pub mod mapping;
pub mod pattern;
pub mod scanner;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use builder::{BuildStack, Builder, Parameters, params};
pub use config::Config;
pub use error::{BuildError, PrompterError};
pub use linker::{DependencyRecord, Linker};
pub use mapping::TemplateMap;
pub use scanner::{Flag, scan};
pub use store::{ContentStore, FsStore, MemoryStore};
