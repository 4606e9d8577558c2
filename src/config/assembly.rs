//! Configuration assembly from operator answers.
//!
//! Assembly is an ordered chain of pure steps. Each step takes the
//! configuration built so far plus the answers and returns an extended
//! configuration:
//!
//! 1. [`identity`]: names, category, description, class suffix
//! 2. [`model`]: local and cloud model defaults
//! 3. [`theme`]: color palette, port, input component, labels
//! 4. [`data_flow`]: parameter and variable names, file extension
//! 5. [`finalize`]: fixed endpoint constants
//!
//! Steps that derive values from earlier ones read them back from the
//! configuration, so the order matters and is fixed by [`assemble`].

use super::answers::{Answers, is_all_digits};
use super::Configuration;
use crate::derive::{input_component, suggest_class_suffix, suggest_file_extension};
use crate::error::{Result, SmithError};
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Port of the first generated app; later apps in the same directory count up.
pub const BASE_PORT: u16 = 7860;

const DEFAULT_NAME: &str = "Custom";
const DEFAULT_DATA_TYPE: &str = "Data";
const DEFAULT_EMOJI: &str = "🐉";
const DEFAULT_MODEL: &str = "llama2";
const DEFAULT_MODEL_KEYWORDS: &[&str] = &["llama", "chat"];
const DEFAULT_OPENAI_MODELS: &[&str] = &["gpt-4", "gpt-3.5-turbo"];
const DEFAULT_OUTPUT_PARAM: &str = "analysis_result";
const DEFAULT_DESCRIPTORS: &[&str] = &["data", "content", "information"];

/// Run every assembly step in order.
pub fn assemble(answers: &Answers, suggested_port: u16) -> Result<Configuration> {
    let config = identity(Configuration::new(), answers);
    let config = model(config, answers)?;
    let config = theme(config, answers, suggested_port)?;
    let config = data_flow(config, answers)?;
    let config = finalize(config);

    debug!("assembled configuration with {} keys", config.len());
    Ok(config)
}

/// Identity fields: `TYPE`, `type`, `DATA_TYPE`, `data_type`, `DESCRIPTION`,
/// `EMOJI`, `CLASS_SUFFIX`, `instance`.
pub fn identity(config: Configuration, answers: &Answers) -> Configuration {
    let name = answers.name.as_deref().unwrap_or(DEFAULT_NAME);
    let data_type = answers.data_type.as_deref().unwrap_or(DEFAULT_DATA_TYPE);
    let description = answers.description.clone().unwrap_or_else(|| {
        format!("AI-powered {} analysis tool", data_type.to_lowercase())
    });
    let emoji = answers.emoji.as_deref().unwrap_or(DEFAULT_EMOJI);

    debug!("identity: name={name} data_type={data_type}");

    config.merge(Configuration::from_pairs([
        ("TYPE", name.to_string()),
        ("type", name.to_lowercase()),
        ("DATA_TYPE", data_type.to_string()),
        ("data_type", data_type.to_lowercase()),
        ("DESCRIPTION", description),
        ("EMOJI", emoji.to_string()),
        ("CLASS_SUFFIX", suggest_class_suffix(name, data_type).to_string()),
        ("instance", name.to_lowercase()),
    ]))
}

/// Model fields. Requires `type` from [`identity`].
pub fn model(config: Configuration, answers: &Answers) -> Result<Configuration> {
    let method_suffix = config.require("type")?.to_string();

    let default_model = answers.default_model.as_deref().unwrap_or(DEFAULT_MODEL);
    let keywords = if answers.model_keywords.is_empty() {
        python_list(DEFAULT_MODEL_KEYWORDS)
    } else {
        python_list(&answers.model_keywords)
    };
    let openai_models = match &answers.openai_models {
        None => python_list(
            &DEFAULT_OPENAI_MODELS
                .iter()
                .map(|m| format!("openai:{m}"))
                .collect::<Vec<_>>(),
        ),
        Some(models) => python_list(
            &models
                .iter()
                .map(|m| format!("openai:{m}"))
                .collect::<Vec<_>>(),
        ),
    };

    debug!("model: default={default_model} keywords={keywords}");

    Ok(config.merge(Configuration::from_pairs([
        ("DEFAULT_MODEL", default_model.to_string()),
        ("MODEL_KEYWORDS", keywords),
        ("OPENAI_MODELS", openai_models),
        ("GOOGLE_MODELS", "['google:gemini-pro']".to_string()),
        ("method_suffix", method_suffix),
        ("DEFAULT_OPENAI_MODEL", "gpt-4".to_string()),
        ("TIMEOUT_SECONDS", "60".to_string()),
        ("API_TIMEOUT", "30".to_string()),
    ])))
}

/// Theme and UI fields. Requires `data_type` and `DATA_TYPE` from [`identity`].
///
/// The palette is merged wholesale before the remaining UI fields.
pub fn theme(
    config: Configuration,
    answers: &Answers,
    suggested_port: u16,
) -> Result<Configuration> {
    let component = input_component(config.require("data_type")?);
    let data_type = config.require("DATA_TYPE")?.to_string();

    let port = match answers.port.as_deref().map(str::trim) {
        Some(port) if is_all_digits(port) => port.to_string(),
        _ => suggested_port.to_string(),
    };

    debug!(
        "theme: scheme={} port={port} component={}",
        answers.color_scheme.name(),
        component.component
    );

    Ok(config
        .merge(answers.color_scheme.to_configuration())
        .merge(Configuration::from_pairs([
            ("PORT", port),
            ("GRADIO_COMPONENT", component.component.to_string()),
            ("GRADIO_TYPE", component.kind.to_string()),
            ("COMPONENT_PARAMS", component.params.to_string()),
            ("INPUT_LABEL", format!("📁 Upload {data_type} File")),
            ("OUTPUT_LABEL", format!("📜 {data_type} Analysis")),
            ("ANALYZE_BUTTON", format!("🔍 Analyze {data_type}")),
            ("TAB_ICON", "🔍".to_string()),
        ])))
}

/// Data-flow fields. Requires `type` and `data_type` from [`identity`].
pub fn data_flow(config: Configuration, answers: &Answers) -> Result<Configuration> {
    let type_ = config.require("type")?.to_string();
    let data_type = config.require("data_type")?.to_string();

    let input_param = answers
        .input_param
        .clone()
        .unwrap_or_else(|| format!("{type_}_data"));
    let output_param = answers
        .output_param
        .clone()
        .unwrap_or_else(|| DEFAULT_OUTPUT_PARAM.to_string());
    let default_prompt = answers
        .default_prompt
        .clone()
        .unwrap_or_else(|| format!("Analyze this {data_type} in detail."));
    let descriptors = if answers.descriptors.is_empty() {
        python_list(DEFAULT_DESCRIPTORS)
    } else {
        python_list(&answers.descriptors)
    };

    debug!("data flow: input={input_param} output={output_param}");

    Ok(config.merge(Configuration::from_pairs([
        ("input_data", format!("{input_param}_encoded")),
        ("output_var", "result".to_string()),
        ("input_key", type_.clone()),
        ("output_key", output_param.replace('_', "")),
        ("input_component", format!("{type_}_input")),
        ("output_component", format!("{output_param}_output")),
        ("OUTPUT_COLUMN", title_case(&output_param)),
        ("OUTPUT_TYPE", title_case(&output_param.replace('_', " "))),
        ("result_key", "result".to_string()),
        ("DEFAULT_PROMPT", default_prompt),
        ("METADATA_DESCRIPTORS", descriptors),
        ("FILE_EXTENSION", suggest_file_extension(&data_type).to_string()),
        ("input_param", input_param),
        ("output_param", output_param),
    ])))
}

/// Fixed constants for the generated app's cloud integration.
pub fn finalize(config: Configuration) -> Configuration {
    config.merge(Configuration::from_pairs([
        ("OPENAI_ENDPOINT", "https://api.openai.com/v1/chat/completions"),
        ("GOOGLE_ENDPOINT", "https://api.google.com/v1/analyze"),
        ("API_TYPE", "CLOUD"),
        ("SERVICE_NAME", "API"),
    ]))
}

/// Suggest a port for a new app in `dir`: [`BASE_PORT`] plus the number of
/// generated apps (`dragon*.py`) already there.
///
/// A directory that does not exist yet holds no apps.
pub fn suggest_port(dir: &Path) -> Result<u16> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BASE_PORT),
        Err(source) => {
            return Err(SmithError::Io {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let existing = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with("dragon") && name.ends_with(".py")
        })
        .count();

    Ok(BASE_PORT.saturating_add(u16::try_from(existing).unwrap_or(u16::MAX)))
}

/// Render items as a Python list literal of single-quoted strings.
pub(crate) fn python_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Capitalize the first letter of every alphabetic run and lower-case the rest.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
