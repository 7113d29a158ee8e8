//! Implementation of the `prompter check` command.
//!
//! Analyzes every top-level template whose path is concrete, then lists
//! unmapped flags in every file that analysis reached. Parameterized entry
//! templates are skipped since their path depends on build parameters.

use super::Project;
use crate::error::{PrompterError, Result};
use crate::linker::Linker;
use crate::store::ContentStore;

/// Outcome of checking a project.
#[derive(Debug, Default)]
pub(crate) struct CheckReport {
    pub checked: Vec<String>,
    pub skipped: Vec<String>,
    pub problems: Vec<String>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Execute the `prompter check` command.
pub fn cmd_check(project: &Project) -> Result<()> {
    let report = check_entries(&project.linker, &project.config.entry_kind);

    println!(
        "Checked {} template(s), skipped {} parameterized.",
        report.checked.len(),
        report.skipped.len()
    );
    for problem in &report.problems {
        println!("  - {}", problem);
    }

    if report.passed() {
        println!("No problems found.");
        Ok(())
    } else {
        Err(PrompterError::CheckFailed {
            problems: report.problems.len(),
        })
    }
}

pub(crate) fn check_entries<S: ContentStore>(linker: &Linker<S>, entry_kind: &str) -> CheckReport {
    let mut report = CheckReport::default();

    for (name, pattern) in linker.mapping().variables_of(entry_kind) {
        let Some(path) = pattern.concrete_path() else {
            report.skipped.push(name.to_string());
            continue;
        };

        report.checked.push(name.to_string());
        if let Err(e) = linker.analyze(&path) {
            report.problems.push(format!("{}: {}", name, e));
        }
    }

    for path in linker.analyzed_paths() {
        match linker.unresolved_flags(&path) {
            Ok(flags) => {
                for flag in flags {
                    report.problems.push(format!(
                        "{}:{}: undefined flag '{}'",
                        path, flag.line, flag
                    ));
                }
            }
            Err(e) => report.problems.push(e.to_string()),
        }
    }

    report
}
