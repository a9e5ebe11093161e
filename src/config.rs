//! Configuration file support for the demo.
//!
//! Provides YAML-based configuration through `constitution-writer.config.yml`
//! files, including data structures, file loading, validation, and merging
//! with command-line values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{APPENDED_LINE, DEFAULT_OUTPUT_FILENAME};
use crate::logging::parse_level;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "constitution-writer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<String>,
    pub appended_line: Option<String>,
    pub log_level: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging CLI, config file, and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub output_path: PathBuf,
    pub appended_line: String,
    /// Level from the config file; CLI flags are applied by `logging::resolve_level`
    pub config_log_level: Option<String>,
}

/// Fields accepted in `constitution-writer.config.yml`
const KNOWN_FIELDS: [&str; 3] = ["output", "appended_line", "log_level"];

/// Reads a config file given with `--config` or found by [`discover_config`].
///
/// The file must exist. An empty or whitespace-only file leaves every
/// setting at its default. Validation failures abort the demo before
/// the constitution file is touched.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    for warning in unknown_field_warnings(&config) {
        eprintln!("{}", warning);
    }

    Ok(config)
}

/// Looks for `constitution-writer.config.yml` in `dir`.
///
/// The demo runs fine without one, so a missing file is `Ok(None)`.
/// A file that is present but broken is still an error.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    load_config_from_path(&config_path).map(Some)
}

/// Merge the CLI output path over the config file over built-in defaults.
pub fn resolve_settings(cli_output: Option<String>, config: Option<ConfigFile>) -> DemoSettings {
    let config = config.unwrap_or_default();

    let output = cli_output
        .or(config.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILENAME.to_string());

    DemoSettings {
        output_path: PathBuf::from(output),
        appended_line: config
            .appended_line
            .unwrap_or_else(|| APPENDED_LINE.to_string()),
        config_log_level: config.log_level,
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref output) = config.output {
        if output.trim().is_empty() {
            bail!(
                "Invalid config: output must not be empty.\n\n\
                 💡 Hint: Remove the 'output' field to use the default \"{}\".",
                DEFAULT_OUTPUT_FILENAME
            );
        }
    }

    if let Some(ref level) = config.log_level {
        if parse_level(level).is_none() {
            bail!(
                "Invalid config: unknown log_level '{}'.\n\n\
                 💡 Hint: Use one of trace, debug, info, warn, error.",
                level
            );
        }
    }

    Ok(())
}

/// One warning per field outside `output`, `appended_line` and `log_level`, sorted by name.
///
/// Printed straight to stderr: the config decides the log level, so the
/// subscriber does not exist yet.
fn unknown_field_warnings(config: &ConfigFile) -> Vec<String> {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|key| {
            format!(
                "⚠️  Warning: Unknown config field '{}' will be ignored (expected one of: {}).",
                key,
                KNOWN_FIELDS.join(", ")
            )
        })
        .collect()
}
