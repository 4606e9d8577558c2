//! Raw operator answers, before any defaults or derivations are applied.
//!
//! Answers are collected interactively by the prompt layer or loaded from a
//! YAML answers file, so a run can be replayed without prompts. Every free-text
//! field is optional: an absent or blank answer means "use the default", and
//! defaults are resolved during assembly because several of them depend on
//! other answers.

use super::palette::ColorScheme;
use crate::error::{Result, SmithError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every value the setup flow asks for.
///
/// Unknown fields in an answers file are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Answers {
    // =========================================================================
    // Identity
    // =========================================================================
    /// Dragon name, e.g. `Script`, `Lab`, `Code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Category of data the app analyzes, e.g. `Document`, `Video`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    // =========================================================================
    // Models
    // =========================================================================
    /// Default local model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,

    /// Keywords used by the generated app to discover relevant local models.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub model_keywords: Vec<String>,

    /// Cloud models to offer. `None` means the default set; `Some(vec![])`
    /// means no cloud models at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_models: Option<Vec<String>>,

    // =========================================================================
    // UI
    // =========================================================================
    pub color_scheme: ColorScheme,

    /// Port as typed. Anything that is not all digits falls back to the
    /// suggested port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    // =========================================================================
    // Data flow
    // =========================================================================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_param: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_param: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prompt: Option<String>,

    /// Descriptors the generated app records in its metadata.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descriptors: Vec<String>,
}

impl Answers {
    /// Load answers from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SmithError::UserError(format!(
                "failed to read answers file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse answers from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let answers: Answers = serde_yaml::from_str(yaml)
            .map_err(|e| SmithError::UserError(format!("failed to parse answers YAML: {}", e)))?;

        answers.validate()?;
        Ok(answers.normalized())
    }

    /// Serialize answers to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SmithError::UserError(format!("failed to serialize answers to YAML: {}", e))
        })
    }

    /// Validate values that cannot be recovered by falling back to a default.
    ///
    /// Interactive port input falls back silently; an answers file is written
    /// deliberately, so a non-numeric port there is reported instead.
    pub fn validate(&self) -> Result<()> {
        if let Some(port) = self.port.as_deref().map(str::trim)
            && !port.is_empty()
            && (!is_all_digits(port) || port.parse::<u16>().is_err())
        {
            return Err(SmithError::UserError(format!(
                "answers validation failed: port must be a number between 0 and 65535 (found '{}')",
                port
            )));
        }

        Ok(())
    }

    /// Trim every field, turning blank answers into "absent".
    pub fn normalized(self) -> Self {
        Self {
            name: blank_to_none(self.name),
            data_type: blank_to_none(self.data_type),
            description: blank_to_none(self.description),
            emoji: blank_to_none(self.emoji),
            default_model: blank_to_none(self.default_model),
            model_keywords: trim_list(self.model_keywords),
            openai_models: self.openai_models.map(trim_list),
            color_scheme: self.color_scheme,
            port: blank_to_none(self.port),
            input_param: blank_to_none(self.input_param),
            output_param: blank_to_none(self.output_param),
            default_prompt: blank_to_none(self.default_prompt),
            descriptors: trim_list(self.descriptors),
        }
    }
}

/// True when `s` is non-empty and every character is an ASCII digit.
pub(crate) fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn trim_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
