//! Error types for netswitch operations

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for netswitch operations
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    System(#[from] SystemError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    /// Whether the error was caused by what the user typed or who ran the tool,
    /// as opposed to a failure of the system underneath.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            NetworkError::Validation(_) | NetworkError::System(SystemError::PrivilegeRequired)
        )
    }
}

/// Address validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid IP Address or CIDR '{value}'")]
    InvalidAddressCidr { value: String },

    #[error("Invalid IP Address '{value}'")]
    InvalidAddress { value: String },
}

/// Tool settings errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// System operation errors
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("root privileges required.")]
    PrivilegeRequired,

    #[error("Command execution failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration write failed: {}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration read failed: {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
