//! Implementation of the `dragonsmith setup` command.
//!
//! # What `dragonsmith setup` does
//!
//! 1. Suggests a port from the apps already in the output directory
//! 2. Collects answers from the prompts (or an answers file)
//! 3. Optionally saves the answers for replay
//! 4. Assembles the configuration
//! 5. Loads the app template (built in unless `--template` is given); if an
//!    override is missing nothing is written
//! 6. Writes the app, requirements.txt, .gitignore and CLAUDE.md
//!
//! The first write failure stops the run; files already written stay.

use crate::artifacts::{ArtifactSet, source_file_name};
use crate::cli::SetupArgs;
use crate::config::{Answers, Configuration, assemble, suggest_port};
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::prompt::{Prompter, TerminalPrompter, collect_answers};
use crate::template::{resolve_template, unresolved};
use log::{info, warn};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Execute the `dragonsmith setup` command.
pub fn cmd_setup(args: SetupArgs) -> Result<()> {
    let suggested_port = suggest_port(&args.output_dir)?;

    print_welcome();

    let answers = match &args.answers {
        Some(path) => {
            info!("reading answers from {}", path.display());
            Answers::load(path)?
        }
        None if io::stdin().is_terminal() && io::stdout().is_terminal() => {
            collect_answers(&mut TerminalPrompter, suggested_port)?
        }
        None => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            collect_answers(&mut prompter, suggested_port)?
        }
    };

    if let Some(path) = &args.save_answers {
        atomic_write_file(path, &answers.to_yaml()?)?;
        println!("💾 Saved answers to {}", path.display());
    }

    let config = assemble(&answers, suggested_port)?;

    println!();
    println!("🔧 Creating Dragon{} files...", config.require("TYPE")?);
    println!("{}", "-".repeat(40));

    let written = generate(&config, args.template.as_deref(), &args.output_dir)?;

    print_summary(&config, &written)?;
    Ok(())
}

/// Load the template and write every artifact into `output_dir`.
///
/// Returns the written paths in order.
pub(crate) fn generate(
    config: &Configuration,
    template_path: Option<&Path>,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let template = resolve_template(template_path)?;

    let missing = unresolved(&template, config);
    if !missing.is_empty() {
        warn!(
            "template tokens without a value will be left as-is: {}",
            missing.join(", ")
        );
    }

    let artifacts = ArtifactSet::build(config, &template)?;

    let mut written = Vec::new();
    for artifact in artifacts.iter() {
        written.push(artifact.write_to(output_dir)?);
        println!("✅ Created {}", artifact.name);
    }
    Ok(written)
}

fn print_welcome() {
    println!("🐉 Welcome to Dragon Template Setup!");
    println!("{}", "=".repeat(50));
    println!("This will help you create a custom Dragon AI analysis tool.");
    println!("Answer the questions below to configure your Dragon variant.");
    println!();
}

fn print_summary(config: &Configuration, written: &[PathBuf]) -> Result<()> {
    println!();
    println!("🎉 Dragon{} setup complete!", config.require("TYPE")?);
    println!("📁 Generated files:");
    for path in written {
        println!("   - {}", path.display());
    }
    println!();
    println!("🚀 Next steps:");
    println!("   1. pip install -r requirements.txt");
    println!("   2. python {}", source_file_name(config)?);
    println!("   3. Open http://localhost:{}", config.require("PORT")?);
    Ok(())
}
