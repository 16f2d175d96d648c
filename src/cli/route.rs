//! CLI route: run context and dispatch for batch and interactive modes.

use crate::cli::interactive;
use crate::cli::parse::{DebugMode, Invocation};
use crate::cli::presentation::format_toggle_report;
use crate::config::ToolConfig;
use crate::detect::debug_state;
use crate::error::ToggleError;
use crate::{plist_io, toggle};
use std::path::Path;
use tracing::info;

/// Runtime context for CLI execution: the loaded tool configuration.
pub struct RunContext {
    config: ToolConfig,
}

impl RunContext {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Execute an invocation. Returns the text to print on success.
    pub fn execute(&self, invocation: &Invocation) -> Result<String, ToggleError> {
        match invocation {
            Invocation::Batch { plist, mode } => self.handle_batch(plist, *mode),
            Invocation::Interactive => {
                interactive::run(&self.config.interactive)?;
                Ok(String::new())
            }
        }
    }

    /// Load once, pick the direction from the current state, apply, save.
    fn handle_batch(&self, plist: &Path, mode: DebugMode) -> Result<String, ToggleError> {
        let mut loaded = plist_io::load(plist)?;
        let current = debug_state(&loaded.document);
        let enable = mode.resolve(current);
        info!(path = %plist.display(), ?mode, %current, enable, "Resolved toggle direction");

        let report = toggle::apply(&mut loaded.document, enable)?;
        plist_io::save(&loaded.document, plist, loaded.format)?;
        Ok(format_toggle_report(plist, &report))
    }
}
