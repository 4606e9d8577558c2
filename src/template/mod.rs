//! Template loading and rendering.
//!
//! Templates use `{{NAME}}` placeholders:
//!
//! ```text
//! class Dragon{{CLASS_SUFFIX}}:
//!     """{{DESCRIPTION}}"""
//! ```
//!
//! Rendering is pure; this module also owns reading the template from disk
//! and the app template built into the binary.

mod render;

pub use render::{placeholders, render, unresolved};

use crate::error::{Result, SmithError};
use std::borrow::Cow;
use std::path::Path;

/// The Dragon app template shipped with dragonsmith.
pub const BUILTIN_TEMPLATE: &str = include_str!("../../templates/dragon_template.py");

/// Use the template at `path`, or the built-in one when no path is given.
pub fn resolve_template(path: Option<&Path>) -> Result<Cow<'static, str>> {
    match path {
        Some(path) => load_template(path).map(Cow::Owned),
        None => Ok(Cow::Borrowed(BUILTIN_TEMPLATE)),
    }
}

/// Read a template file in full.
///
/// A missing file is reported as [`SmithError::TemplateNotFound`] so the
/// caller can abort generation before anything is written.
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SmithError::TemplateNotFound(path.to_path_buf()));
    }

    std::fs::read_to_string(path).map_err(|source| SmithError::Io {
        path: path.to_path_buf(),
        source,
    })
}
