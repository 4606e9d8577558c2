//! Read-only helper commands: `palettes` and `suggest`.

use crate::cli::SuggestArgs;
use crate::config::ColorScheme;
use crate::derive::{input_component, suggest_class_suffix, suggest_file_extension};
use crate::error::Result;

/// Execute the `dragonsmith palettes` command.
pub fn cmd_palettes() -> Result<()> {
    print!("{}", palette_listing());
    Ok(())
}

/// Execute the `dragonsmith suggest` command.
pub fn cmd_suggest(args: SuggestArgs) -> Result<()> {
    print!("{}", suggestion_report(&args.name, &args.category));
    Ok(())
}

/// Numbered scheme list, in menu order.
fn palette_listing() -> String {
    ColorScheme::ALL
        .iter()
        .enumerate()
        .map(|(i, scheme)| {
            format!(
                "{}. {:<7} {}\n",
                i + 1,
                scheme.title(),
                scheme.primary_color()
            )
        })
        .collect()
}

fn suggestion_report(name: &str, category: &str) -> String {
    let input = input_component(category);
    let mut report = String::new();
    report.push_str(&format!(
        "Class suffix:    {}\n",
        suggest_class_suffix(name, category)
    ));
    report.push_str(&format!(
        "File extension:  {}\n",
        suggest_file_extension(category)
    ));
    report.push_str(&format!(
        "Input component: gr.{}(type=\"{}\")",
        input.component, input.kind
    ));
    if !input.params.is_empty() {
        report.push_str(&format!(" [{}]", input.params));
    }
    report.push('\n');
    report
}
