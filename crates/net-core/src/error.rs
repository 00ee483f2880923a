//! Error types for interfaces generation

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for interfaces generation
#[derive(Debug, Error)]
pub enum IfGenError {
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    #[error("Port table error: {0}")]
    PortTable(#[from] PortTableError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Invalid command line flag usage
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("no generation mode selected")]
    NoModeSelected,

    #[error("{message}")]
    InvalidFlagCombination { message: String },
}

/// Port table enumeration errors
#[derive(Debug, Error)]
pub enum PortTableError {
    #[error("cannot read port table {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no ports found")]
    EmptyPortList,

    #[error("invalid port name: {name:?}")]
    InvalidPortName { name: String },
}

/// Settings loading errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UsageError {
    /// Bridge generation was combined with a merge file
    pub fn merge_requires_swp_defaults() -> Self {
        UsageError::InvalidFlagCombination {
            message: "mergefile option currently only supported with -s".to_string(),
        }
    }
}
