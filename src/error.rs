//! Error types for the dragonsmith CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dragonsmith operations.
///
/// Each variant maps to a specific exit code. Invalid interactive input is
/// never represented here: prompts recover locally by re-asking or defaulting.
#[derive(Error, Debug)]
pub enum SmithError {
    /// User provided invalid arguments or an unusable input file.
    #[error("{0}")]
    UserError(String),

    /// The template file does not exist.
    #[error("Template file {} not found!", .0.display())]
    TemplateNotFound(PathBuf),

    /// Strict rendering found tokens with no configured value.
    #[error("unresolved placeholders: {}", .0.join(", "))]
    UnresolvedPlaceholders(Vec<String>),

    /// A file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output artifact could not be written.
    #[error("failed to write '{0}': {1}")]
    WriteError(String, String),

    /// The operator interrupted the run.
    #[error("Setup cancelled by user.")]
    Cancelled,
}

impl SmithError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SmithError::UserError(_) => exit_codes::USER_ERROR,
            SmithError::TemplateNotFound(_) => exit_codes::TEMPLATE_FAILURE,
            SmithError::UnresolvedPlaceholders(_) => exit_codes::TEMPLATE_FAILURE,
            SmithError::Io { .. } => exit_codes::IO_FAILURE,
            SmithError::WriteError(..) => exit_codes::IO_FAILURE,
            SmithError::Cancelled => exit_codes::CANCELLED,
        }
    }
}

/// Result type alias for dragonsmith operations.
pub type Result<T> = std::result::Result<T, SmithError>;
