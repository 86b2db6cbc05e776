//! Detect and fill in configuration keys missing from an older file.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of the current configuration, in file order.
pub fn known_keys() -> AppResult<Vec<String>> {
    let defaults = serde_yaml::to_value(Config::default())?;
    Ok(defaults
        .as_mapping()
        .map(|m| m.keys().filter_map(|k| k.as_str().map(String::from)).collect())
        .unwrap_or_default())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Compare the keys in `path` with the current configuration keys.
pub fn check(path: &Path) -> AppResult<CheckReport> {
    if !path.exists() {
        return Err(AppError::NotFound(format!(
            "config file {}",
            path.display()
        )));
    }

    let map = read_mapping(path)?;
    let known = known_keys()?;

    let missing = known
        .iter()
        .filter(|k| !map.contains_key(Value::String((*k).clone())))
        .cloned()
        .collect();

    let unknown = map
        .keys()
        .filter_map(Value::as_str)
        .filter(|k| !known.iter().any(|known| known == k))
        .map(String::from)
        .collect();

    Ok(CheckReport { missing, unknown })
}

/// Add every missing key with its default value and rewrite the file.
/// Existing values and unknown keys are preserved. Returns the keys added.
pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Err(AppError::NotFound(format!(
            "config file {}",
            path.display()
        )));
    }

    let mut map = read_mapping(path)?;
    let defaults = serde_yaml::to_value(Config::default())?;
    let mut added = Vec::new();

    if let Some(default_map) = defaults.as_mapping() {
        for (key, value) in default_map {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.clone());
                if let Some(k) = key.as_str() {
                    added.push(k.to_string());
                }
            }
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, serialized)?;
        tracing::debug!(path = %path.display(), ?added, "config keys added");
    }

    Ok(added)
}
