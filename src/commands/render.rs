//! Implementation of the `dragonsmith render` command.

use crate::cli::RenderArgs;
use crate::config::Configuration;
use crate::error::{Result, SmithError};
use crate::fs::atomic_write_file;
use crate::template::{load_template, render, unresolved};
use log::{info, warn};
use std::path::Path;

/// Execute the `dragonsmith render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let template = load_template(&args.template)?;
    let vars = load_vars(&args.vars)?;
    info!(
        "rendering {} with {} vars",
        args.template.display(),
        vars.len()
    );

    let output = render_checked(&template, &vars, args.strict)?;

    match &args.out {
        Some(path) => {
            atomic_write_file(path, &output)?;
            println!("✅ Created {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Render, refusing unresolved tokens when `strict` is set.
fn render_checked(template: &str, vars: &Configuration, strict: bool) -> Result<String> {
    let missing = unresolved(template, vars);
    if !missing.is_empty() {
        if strict {
            return Err(SmithError::UnresolvedPlaceholders(missing));
        }
        warn!("unresolved placeholders left as-is: {}", missing.join(", "));
    }

    Ok(render(template, vars))
}

/// Load a vars file, choosing the parser from the extension.
fn load_vars(path: &Path) -> Result<Configuration> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SmithError::UserError(format!(
            "failed to read vars file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Configuration::from_json(&content)
    } else {
        Configuration::from_yaml(&content)
    }
}
