//! CLI argument parsing for dragonsmith.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Dragonsmith: generate customized Dragon analysis apps from a template.
///
/// A setup run asks a series of questions, derives the remaining values,
/// substitutes everything into the `{{PLACEHOLDER}}` tokens of the app
/// template, and writes the app plus requirements.txt, .gitignore and a
/// project guide.
#[derive(Parser, Debug)]
#[command(name = "dragonsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for dragonsmith.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Dragon app.
    ///
    /// Prompts for the app's identity, models, theme and data flow (or reads
    /// them from an answers file), then writes the generated files.
    Setup(SetupArgs),

    /// Render any template against a flat YAML or JSON vars file.
    Render(RenderArgs),

    /// List the available color schemes.
    Palettes,

    /// Show the values derived from a dragon name and data category.
    Suggest(SuggestArgs),
}

/// Arguments for the `setup` command.
#[derive(Parser, Debug)]
pub struct SetupArgs {
    /// App template to customize instead of the built-in one.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Directory the generated files are written to.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Read answers from a YAML file instead of prompting.
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Save the collected answers as YAML for later replay.
    #[arg(long)]
    pub save_answers: Option<PathBuf>,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template file containing `{{NAME}}` tokens.
    pub template: PathBuf,

    /// Vars file (`.json`, otherwise parsed as YAML).
    #[arg(long)]
    pub vars: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Fail if any token in the template has no value.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `suggest` command.
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Dragon name, e.g. `Script`.
    pub name: String,

    /// Data category, e.g. `Document`.
    pub category: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
