//! The set of files one setup run produces.
//!
//! Artifacts are built in memory first, then written one by one, so a
//! missing template or a bad configuration is caught before any file lands on
//! disk:
//!
//! 1. `dragon{type}_gradio.py`: the rendered app template
//! 2. `requirements.txt`: Python dependencies for the data category
//! 3. `.gitignore`
//! 4. `CLAUDE.md`: project guide

mod documents;

use crate::config::Configuration;
use crate::derive;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::template::render;
use log::debug;
use std::path::{Path, PathBuf};

use documents::{GITIGNORE_TEMPLATE, GUIDE_TEMPLATE};

pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const GUIDE_FILE: &str = "CLAUDE.md";

/// File name of the generated app for a configuration.
pub fn source_file_name(config: &Configuration) -> Result<String> {
    Ok(format!("dragon{}_gradio.py", config.require("type")?))
}

/// A named text file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub contents: String,
}

impl Artifact {
    fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Write this artifact into `dir`, replacing any existing file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.name);
        atomic_write_file(&path, &self.contents)?;
        debug!("wrote {} ({} bytes)", path.display(), self.contents.len());
        Ok(path)
    }
}

/// Ordered artifacts for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    /// Build every artifact from the configuration and the loaded app template.
    pub fn build(config: &Configuration, template: &str) -> Result<Self> {
        let artifacts = vec![
            Artifact::new(source_file_name(config)?, render(template, config)),
            Artifact::new(REQUIREMENTS_FILE, requirements_txt(config)?),
            Artifact::new(GITIGNORE_FILE, render(GITIGNORE_TEMPLATE, config)),
            Artifact::new(GUIDE_FILE, render(GUIDE_TEMPLATE, config)),
        ];
        Ok(Self { artifacts })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    #[cfg(test)]
    pub fn names(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.name.as_str()).collect()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }
}

/// Dependency list, one per line, without a trailing newline.
fn requirements_txt(config: &Configuration) -> Result<String> {
    Ok(derive::requirements(config.require("data_type")?).join("\n"))
}
