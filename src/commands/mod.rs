//! Command implementations for dragonsmith.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod info;
mod render;
mod setup;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Setup(args) => setup::cmd_setup(args),
        Command::Render(args) => render::cmd_render(args),
        Command::Palettes => info::cmd_palettes(),
        Command::Suggest(args) => info::cmd_suggest(args),
    }
}
