//! Load configuration resolution: flags over config file over defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use rxterms_model::LoadConfig;

use crate::cli::SourceArgs;

/// Reads a TOML load configuration.
pub fn read_config_file(path: &Path) -> Result<LoadConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let config: LoadConfig =
        toml::from_str(&content).with_context(|| format!("parse config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Turns the escape sequences accepted on the command line into delimiter text.
pub fn unescape_delimiter(raw: &str) -> String {
    match raw {
        "\\t" | "tab" => "\t".to_string(),
        other => other.to_string(),
    }
}

/// Resolves the effective configuration for one command.
pub fn resolve_config(source: &SourceArgs, index: Option<&str>) -> Result<LoadConfig> {
    let mut config = match &source.config {
        Some(path) => read_config_file(path)?,
        None => LoadConfig::default(),
    };
    if let Some(path) = &source.data_file {
        config = config.with_data_file(path.clone());
    }
    if let Some(delimiter) = &source.delimiter {
        config = config.with_delimiter(unescape_delimiter(delimiter));
    }
    if let Some(name) = index {
        config = config.with_index_name(name);
    }
    if config.data_file.name.as_os_str().is_empty() {
        bail!("no data file given: pass DATA_FILE or set [data_file] name in --config");
    }
    if config.data_file.field_delimiter.is_empty() {
        bail!("field delimiter must not be empty");
    }
    Ok(config)
}
