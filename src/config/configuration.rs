//! The resolved placeholder → value mapping for one generation run.

use crate::error::{Result, SmithError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from placeholder name to replacement value.
///
/// Keys are unique and kept sorted. Partial mappings are combined with
/// [`Configuration::merge`], where later values win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(BTreeMap<String, String>);

impl Configuration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Return a copy of `self` extended with `other`; `other` wins on collisions.
    pub fn merge(mut self, other: Configuration) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Return `self` with a single entry set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Look up a key that an earlier assembly step must have set.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            SmithError::UserError(format!("configuration is missing required key '{}'", key))
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a flat map from YAML. Scalar values are coerced to strings.
    ///
    /// Keys must be usable as `{{NAME}}` tokens: non-empty, without braces.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(yaml)
            .map_err(|e| SmithError::UserError(format!("failed to parse vars YAML: {}", e)))?;

        raw.into_iter()
            .map(|(key, value)| {
                check_key(&key)?;
                let value = match value {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Null => String::new(),
                    _ => return Err(non_scalar(&key)),
                };
                Ok((key, value))
            })
            .collect::<Result<BTreeMap<_, _>>>()
            .map(Self)
    }

    /// Parse a flat map from JSON. Same value and key rules as [`Self::from_yaml`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| SmithError::UserError(format!("failed to parse vars JSON: {}", e)))?;

        raw.into_iter()
            .map(|(key, value)| {
                check_key(&key)?;
                let value = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    serde_json::Value::Null => String::new(),
                    _ => return Err(non_scalar(&key)),
                };
                Ok((key, value))
            })
            .collect::<Result<BTreeMap<_, _>>>()
            .map(Self)
    }
}

/// Reject keys no `{{NAME}}` token could ever match.
fn check_key(key: &str) -> Result<()> {
    if key.is_empty() || key.contains(['{', '}']) {
        return Err(SmithError::UserError(format!(
            "invalid key '{}': keys must be non-empty and contain no braces",
            key
        )));
    }
    Ok(())
}

fn non_scalar(key: &str) -> SmithError {
    SmithError::UserError(format!(
        "value for '{}' must be a string, number or boolean",
        key
    ))
}
