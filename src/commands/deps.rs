//! Implementation of the `prompter deps` command.

use super::{Project, parse_params};
use crate::cli::DepsArgs;
use crate::error::{PrompterError, Result};
use crate::linker::DependencyRecord;

/// Execute the `prompter deps` command.
pub fn cmd_deps(project: &Project, args: DepsArgs) -> Result<()> {
    let params = parse_params(&args.params)?;
    let record = project.builder().dependencies(&args.template, &params)?;

    if args.json {
        let json = serde_json::to_string_pretty(&*record).map_err(|e| {
            PrompterError::UserError(format!("failed to serialize dependencies: {}", e))
        })?;
        println!("{}", json);
    } else {
        print!("{}", render_record(&args.template, &record));
    }

    Ok(())
}

/// Human-readable dependency summary.
pub(crate) fn render_record(template: &str, record: &DependencyRecord) -> String {
    let mut out = format!("{} ({})\n", template, record.path);

    let sections = [
        ("Required parameters", &record.required_parameters),
        ("Dependencies", &record.direct_dependencies),
        ("Declared variables", &record.declared_variables),
    ];
    for (title, items) in sections {
        out.push_str(&format!("\n{}:\n", title));
        if items.is_empty() {
            out.push_str("  (none)\n");
        }
        for item in items {
            out.push_str(&format!("  - {}\n", item));
        }
    }

    out
}
