use crate::config::KNOWN_FIELDS;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Fields the config file on disk does not define (they fall back to
/// defaults when loaded).
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    missing_in(&content)
}

fn missing_in(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let map = match yaml.as_mapping() {
        Some(m) => m,
        None if yaml.is_null() => return Ok(KNOWN_FIELDS.to_vec()),
        None => {
            return Err(AppError::Config(
                "configuration file is not a YAML mapping".into(),
            ));
        }
    };

    Ok(KNOWN_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}
