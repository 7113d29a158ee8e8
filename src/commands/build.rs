//! Implementation of the `prompter build` command.

use super::{Project, parse_params};
use crate::cli::BuildArgs;
use crate::error::{PrompterError, Result};
use std::io::Write;
use tracing::info;

/// Execute the `prompter build` command.
///
/// Builds the template and writes the text to `--output` or stdout. Nothing
/// is written when the build fails.
pub fn cmd_build(project: &Project, args: BuildArgs) -> Result<()> {
    let params = parse_params(&args.params)?;
    let text = project.builder().build(&args.template, &params)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text).map_err(|e| {
                PrompterError::UserError(format!(
                    "failed to write output file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            info!(template = %args.template, output = %path.display(), bytes = text.len(), "wrote prompt");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| PrompterError::UserError(format!("failed to write output: {}", e)))?;
        }
    }

    Ok(())
}
