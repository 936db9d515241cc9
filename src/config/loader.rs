use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{Result, TocError};
use crate::utils::fs;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Load configuration from config files.
///
/// Explicit files are used when given, otherwise the default file names are
/// looked up in `source_dir`. Files are merged in order: later keys win and
/// nested tables merge key by key.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> Result<Config> {
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    let mut merged = Value::Object(Map::new());
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in &config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_values(&mut merged, read_config_value(path)?);
        }
    }

    let config: Config = serde_json::from_value(merged)
        .map_err(|e| TocError::Config(format!("Invalid configuration: {}", e)))?;

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Read one configuration file into a generic value
fn read_config_value(config_path: &Path) -> Result<Value> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_file(config_path).map_err(|e| {
        TocError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    // Parse based on file extension, YAML when there is none
    match fs::get_extension(config_path).as_deref() {
        None | Some("yml") | Some("yaml") => parse_yaml_config(&content, config_path),
        Some("toml") => parse_toml_config(&content, config_path),
        Some("json") => parse_json_config(&content, config_path),
        Some(ext) => Err(TocError::Config(format!(
            "Unsupported configuration file format: {}",
            ext
        ))),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> Result<Value> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })?;
    serde_json::to_value(yaml).map_err(|e| {
        TocError::Config(format!(
            "Unsupported YAML in configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> Result<Value> {
    let table: toml::Table = toml::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
    })?;
    serde_json::to_value(table).map_err(|e| {
        TocError::Config(format!(
            "Unsupported TOML in configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Merge `overlay` into `base`; an empty (null) document changes nothing
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}
