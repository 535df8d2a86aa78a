//! Config file maintenance: detect and fill in fields added after the
//! file was first written. The config is merged the same way the
//! snapshot is: every field optional, defaults win only when absent.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;

fn default_mapping() -> AppResult<Value> {
    serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))
}

fn load_raw() -> AppResult<Value> {
    let path = Config::config_file();
    let content = fs::read_to_string(&path)?;
    serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
}

/// Keys present in the compiled-in defaults but missing from the file.
pub fn missing_keys() -> AppResult<Vec<String>> {
    let yaml = load_raw()?;
    let defaults = default_mapping()?;

    let mut missing = Vec::new();
    if let (Some(def_map), Some(map)) = (defaults.as_mapping(), yaml.as_mapping()) {
        for key in def_map.keys() {
            if !map.contains_key(key) {
                if let Some(k) = key.as_str() {
                    missing.push(k.to_string());
                }
            }
        }
    }
    Ok(missing)
}

/// Fill in any missing keys with their defaults and rewrite the file.
/// Returns true when the file was changed.
pub fn run_config_migration() -> AppResult<bool> {
    let mut yaml = load_raw()?;
    let defaults = default_mapping()?;

    let mut changed = false;
    if let (Some(def_map), Some(map)) = (defaults.as_mapping(), yaml.as_mapping_mut()) {
        for (key, value) in def_map {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.clone());
                changed = true;
                if let Some(k) = key.as_str() {
                    info(format!("Added missing config field '{k}'"));
                }
            }
        }
    }

    if changed {
        let out = serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Config::config_file(), out)?;
        success("Configuration file migrated.");
    }

    Ok(changed)
}
