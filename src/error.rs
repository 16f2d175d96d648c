//! Error types for config.plist loading, editing, and saving.

use std::path::PathBuf;
use thiserror::Error;

/// Document shape errors raised while walking nested plist paths
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Path segment is not a dictionary: {path}")]
    NotADictionary { path: String },

    #[error("Value is not an array: {path}")]
    NotAnArray { path: String },
}

/// Application errors for the toggle workflow
#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    #[error("Failed to load {path:?}: plist root is not a dictionary")]
    RootNotDictionary { path: PathBuf },

    #[error("Failed to save {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl From<config::ConfigError> for ToggleError {
    fn from(err: config::ConfigError) -> Self {
        ToggleError::Config(err.to_string())
    }
}

impl From<dialoguer::Error> for ToggleError {
    fn from(err: dialoguer::Error) -> Self {
        ToggleError::Prompt(err.to_string())
    }
}
