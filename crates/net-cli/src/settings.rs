//! Tool settings
//!
//! Defaults for the interface, the netplan file and the apply command. Loaded
//! from an optional settings file and `NETSWITCH_*` environment variables;
//! command line flags take precedence over both.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use netswitch_core::{DEFAULT_APPLY_COMMAND, DEFAULT_CONFIG_PATH, DEFAULT_INTERFACE};

/// Settings file locations, first existing one wins
pub const SETTINGS_PATHS: [&str; 2] = ["/etc/netswitch/netswitch.toml", "./netswitch.toml"];

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid settings path: {0}")]
    InvalidPath(String),
}

/// Tool settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interface edited when `--interface` is not given
    pub interface: String,
    /// Netplan file edited when `--config` is not given
    pub config_path: PathBuf,
    /// Command run by `--apply`, program first
    pub apply_command: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interface: DEFAULT_INTERFACE.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            apply_command: DEFAULT_APPLY_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Prefix of the environment variables read into [`Settings`]
pub const ENV_PREFIX: &str = "NETSWITCH";

/// `NETSWITCH_*` variables; `NETSWITCH_APPLY_COMMAND` is split on spaces
pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(" ")
        .with_list_parse_key("apply_command")
        .ignore_empty(true)
}

impl Settings {
    /// Load settings from a file, then the environment; keys missing from
    /// both keep their defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        Self::build(Some(path.as_ref()), environment())
    }

    /// Load settings from the first standard location that exists, then the environment
    pub fn load_with_defaults() -> Self {
        let file = SETTINGS_PATHS.iter().map(Path::new).find(|path| path.exists());

        match Self::build(file, environment()) {
            Ok(settings) => {
                if let Some(path) = file {
                    log::debug!("Loaded settings from {}", path.display());
                }
                settings
            }
            Err(e) => {
                if let Some(path) = file {
                    log::warn!("Failed to load settings from {}: {}", path.display(), e);
                }
                Self::build(None, environment()).unwrap_or_else(|e| {
                    log::warn!("Ignoring {}_* environment settings: {}", ENV_PREFIX, e);
                    Self::default()
                })
            }
        }
    }

    /// Layer an optional settings file and an environment source over the defaults
    pub fn build(file: Option<&Path>, env: config::Environment) -> Result<Self, SettingsError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            let name = path
                .to_str()
                .ok_or_else(|| SettingsError::InvalidPath(path.display().to_string()))?;
            builder = builder.add_source(config::File::with_name(name));
        }

        let mut settings: Self = builder.add_source(env).build()?.try_deserialize()?;

        // Repeated spaces in the environment leave empty words behind
        settings.apply_command.retain(|word| !word.is_empty());
        if settings.apply_command.is_empty() {
            settings.apply_command = Self::default().apply_command;
        }

        Ok(settings)
    }
}
