//! Configuration module for LookSee.
//!
//! Handles the TOML settings file and environment variable expansion.

mod settings;

pub use settings::{
    default_read_functions, expand_env_vars, GeneralSettings, Settings, SettingsError,
    CONFIG_ENV_VAR,
};
