//! Configuration file support for scanboard.
//!
//! Provides YAML-based configuration through `scanboard.config.yml` files,
//! including data structures, file loading, validation, and resolution of
//! the effective settings against CLI overrides and defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::process::ScannerScripts;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "scanboard.config.yml";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_SCANS_FILE: &str = "scans.json";
const DEFAULT_SCHEDULERS_FILE: &str = "schedulers.json";
const DEFAULT_PROGRAM: &str = "python3";
const DEFAULT_BASIC_SCRIPT: &str = "backend/scanner.py";
const DEFAULT_ADVANCED_SCRIPT: &str = "backend/advanced_scanner.py";
const DEFAULT_ULTIMATE_SCRIPT: &str = "backend/ultimate_scanner.py";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub data_dir: Option<PathBuf>,
    pub scans_file: Option<String>,
    pub schedulers_file: Option<String>,
    pub scanner: Option<ScannerConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `scanner:` section: how scans are executed.
#[derive(Debug, Deserialize, Default)]
pub struct ScannerConfig {
    pub program: Option<String>,
    pub basic: Option<PathBuf>,
    pub advanced: Option<PathBuf>,
    pub ultimate: Option<PathBuf>,
    /// Kill the scanner after this many seconds
    pub timeout_secs: Option<u64>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (key, value) in [
        ("scans_file", &config.scans_file),
        ("schedulers_file", &config.schedulers_file),
    ] {
        if let Some(name) = value {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: {} must not be empty.\n\n\
                     💡 Hint: Remove the field to use the default file name.",
                    key
                );
            }
        }
    }

    if let Some(ref scanner) = config.scanner {
        if scanner.program.as_deref().is_some_and(|p| p.trim().is_empty()) {
            bail!("Invalid config: scanner.program must not be empty.");
        }
        for (key, script) in [
            ("basic", &scanner.basic),
            ("advanced", &scanner.advanced),
            ("ultimate", &scanner.ultimate),
        ] {
            if script
                .as_ref()
                .is_some_and(|p| p.as_os_str().to_string_lossy().trim().is_empty())
            {
                bail!(
                    "Invalid config: scanner.{} must not be empty.\n\n\
                     💡 Hint: Point it at the scanner script, e.g. \"backend/scanner.py\".",
                    key
                );
            }
        }
        if scanner.timeout_secs == Some(0) {
            bail!(
                "Invalid config: scanner.timeout_secs must be greater than 0.\n\n\
                 💡 Hint: Remove the field to let scans run without a time limit."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored", key);
    }
    if let Some(ref scanner) = config.scanner {
        for key in scanner.unknown_fields.keys() {
            log::warn!("Unknown config field 'scanner.{}' will be ignored", key);
        }
    }
}

/// Effective settings after merging CLI flags, the config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub scans_path: PathBuf,
    pub schedulers_path: PathBuf,
    pub scanner_program: String,
    pub scanner_scripts: ScannerScripts,
    pub scanner_timeout: Option<Duration>,
}

impl Settings {
    /// Resolves settings; `data_dir_override` (from `--data-dir`) wins over the file
    pub fn resolve(config: Option<ConfigFile>, data_dir_override: Option<PathBuf>) -> Self {
        let config = config.unwrap_or_default();
        let scanner = config.scanner.unwrap_or_default();

        let data_dir = data_dir_override
            .or(config.data_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Self {
            scans_path: data_dir.join(
                config
                    .scans_file
                    .unwrap_or_else(|| DEFAULT_SCANS_FILE.to_string()),
            ),
            schedulers_path: data_dir.join(
                config
                    .schedulers_file
                    .unwrap_or_else(|| DEFAULT_SCHEDULERS_FILE.to_string()),
            ),
            scanner_program: scanner
                .program
                .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
            scanner_scripts: ScannerScripts {
                basic: scanner
                    .basic
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_BASIC_SCRIPT)),
                advanced: scanner
                    .advanced
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_ADVANCED_SCRIPT)),
                ultimate: scanner
                    .ultimate
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_ULTIMATE_SCRIPT)),
            },
            scanner_timeout: scanner.timeout_secs.map(Duration::from_secs),
        }
    }
}
