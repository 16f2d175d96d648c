//! Configuration System
//!
//! Optional settings for the tool itself: logging and interactive-mode
//! defaults. The config.plist schema locations are fixed and never come from
//! here. Sources are layered with the `config` crate: built-in defaults, the
//! user settings file, an explicit `--config` file, then `TOGGLE_DEBUG__*`
//! environment variables.

use crate::error::ToggleError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Interactive menu settings
    #[serde(default)]
    pub interactive: InteractiveConfig,
}

/// Interactive menu settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveConfig {
    /// Plist selected when the menu opens
    #[serde(default)]
    pub default_plist: Option<PathBuf>,

    /// Wait for enter after each action
    #[serde(default = "default_true")]
    pub pause_after_action: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self {
            default_plist: None,
            pause_after_action: default_true(),
        }
    }
}

/// Loads [`ToolConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the user settings file (if present) and environment.
    pub fn load() -> Result<ToolConfig, ToggleError> {
        Self::load_with(None)
    }

    /// Load as [`ConfigLoader::load`], with `path` layered over the user file.
    /// The explicit file must exist.
    pub fn load_from_file(path: &Path) -> Result<ToolConfig, ToggleError> {
        Self::load_with(Some(path))
    }

    /// Path of the user settings file, if a home directory is known.
    pub fn user_config_path() -> Option<PathBuf> {
        sources::user_file::user_config_path()
    }

    fn load_with(explicit: Option<&Path>) -> Result<ToolConfig, ToggleError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::user_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder);

        let config: ToolConfig = builder.build()?.try_deserialize()?;
        tracing::debug!(?config, "Loaded tool configuration");
        Ok(config)
    }
}
