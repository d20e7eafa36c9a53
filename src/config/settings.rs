//! TOML-based configuration for LookSee.
//!
//! Supports a config file (looksee.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [settings]
//! default_table_name = "dataset"
//! log_file = "looksee"
//! log_dir = "${HOME}/.looksee/logs"
//! log_level = "info"
//! max_log_files = 10
//!
//! [read_functions]
//! csv = "read_csv_auto"
//! parquet = "read_parquet"
//! json = "read_json_auto"
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LOOKSEE_CONFIG";

/// Read functions are spliced into SQL unquoted, so they must be bare identifiers.
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// General settings.
    pub settings: GeneralSettings,

    /// File extension (lower-case, no dot) -> engine read function.
    pub read_functions: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            settings: GeneralSettings::default(),
            read_functions: default_read_functions(),
        }
    }
}

/// The formats every installation understands out of the box.
pub fn default_read_functions() -> BTreeMap<String, String> {
    [
        ("csv", "read_csv_auto"),
        ("parquet", "read_parquet"),
        ("json", "read_json_auto"),
    ]
    .into_iter()
    .map(|(ext, func)| (ext.to_string(), func.to_string()))
    .collect()
}

/// General settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Relation name used when the caller doesn't choose one.
    pub default_table_name: String,

    /// Log file prefix.
    pub log_file: String,

    /// Log directory (supports ${ENV_VAR} expansion). Defaults to the
    /// platform data directory.
    pub log_dir: Option<String>,

    /// Filter used when RUST_LOG is unset.
    pub log_level: String,

    /// Number of rotated log files to keep.
    pub max_log_files: usize,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            default_table_name: "dataset".to_string(),
            log_file: "looksee".to_string(),
            log_dir: None,
            log_level: "info".to_string(),
            max_log_files: 10,
        }
    }
}

impl GeneralSettings {
    /// Get the log directory with environment variables expanded.
    pub fn resolved_log_dir(&self) -> Result<PathBuf, SettingsError> {
        match &self.log_dir {
            Some(dir) => Ok(PathBuf::from(expand_env_vars(dir)?)),
            None => dirs::data_dir()
                .map(|d| d.join("looksee").join("logs"))
                .ok_or_else(|| {
                    SettingsError::InvalidConfig("no data directory for log files".to_string())
                }),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `LOOKSEE_CONFIG`
    /// 2. `./looksee.toml`
    /// 3. `~/.config/looksee/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        // Check environment variable first
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        // Check local directory
        let local_config = PathBuf::from("looksee.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        // Check user config directory
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("looksee").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config file found
        Ok(Settings::default())
    }

    /// Check invariants the rest of the crate relies on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.settings.default_table_name.trim().is_empty() {
            return Err(SettingsError::InvalidConfig(
                "settings.default_table_name must not be empty".to_string(),
            ));
        }

        for (ext, func) in &self.read_functions {
            if ext.is_empty() || ext.starts_with('.') || ext.chars().any(char::is_uppercase) {
                return Err(SettingsError::InvalidConfig(format!(
                    "read_functions key '{}' must be a lower-case extension without a dot",
                    ext
                )));
            }
            if !IDENTIFIER_RE.is_match(func) {
                return Err(SettingsError::InvalidConfig(format!(
                    "read function '{}' for '{}' is not a plain identifier",
                    func, ext
                )));
            }
        }

        Ok(())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            chars.by_ref().take_while(|&ch| ch != '}').collect()
        } else {
            // $VAR (ends at non-alphanumeric/underscore)
            let mut name = String::new();
            while let Some(ch) = chars.next_if(|ch| ch.is_alphanumeric() || *ch == '_') {
                name.push(ch);
            }
            if name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
            name
        };

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
