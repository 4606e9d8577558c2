//! Configuration model for dragonsmith.
//!
//! - [`Answers`]: raw operator inputs, from prompts or a YAML answers file
//! - [`Configuration`]: the resolved placeholder → value mapping
//! - [`ColorScheme`]: the fixed palettes a generated app can use
//! - [`assembly`]: the ordered steps turning answers into a configuration

mod answers;
pub mod assembly;
mod configuration;
mod palette;


// Re-export public API
pub use answers::Answers;
pub use assembly::{BASE_PORT, assemble, suggest_port};
pub use configuration::Configuration;
pub use palette::ColorScheme;
