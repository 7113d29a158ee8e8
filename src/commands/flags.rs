//! Implementation of the `prompter flags` command.

use super::Project;
use crate::builder::BuildStack;
use crate::cli::FlagsArgs;
use crate::error::Result;
use crate::linker::Linker;
use crate::scanner::scan;
use crate::store::ContentStore;

/// Execute the `prompter flags` command.
pub fn cmd_flags(project: &Project, args: FlagsArgs) -> Result<()> {
    print!("{}", render_flags(&project.linker, &args.path)?);
    Ok(())
}

/// One line per flag: line number, flag text, and what it resolves to.
pub(crate) fn render_flags<S: ContentStore>(linker: &Linker<S>, path: &str) -> Result<String> {
    let content = linker.load(path, &BuildStack::root(path))?;
    let flags = scan(&content);

    if flags.is_empty() {
        return Ok(format!("{}: no flags\n", path));
    }

    let mut out = String::new();
    for flag in &flags {
        let target = if flag.is_parameter() {
            "(parameter)".to_string()
        } else {
            match linker.resolve_pattern(flag) {
                Some(pattern) => format!("-> {}", pattern),
                None => "(undefined)".to_string(),
            }
        };
        out.push_str(&format!("{}:{}: {} {}\n", path, flag.line, flag, target));
    }

    Ok(out)
}
