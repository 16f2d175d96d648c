//! CLI parse: clap types for toggle-debug. Definitions and flag normalization only.

use crate::detect::DebugState;
use clap::Parser;
use std::path::PathBuf;

/// ToggleDebug - toggle debug settings in an OpenCore config.plist
#[derive(Parser, Debug)]
#[command(name = "toggle-debug")]
#[command(about = "Toggle debug settings in an OpenCore config.plist")]
pub struct Cli {
    /// on/off/toggle (default is toggle). Sets AppleDebug, ApplePanic, Target, boot-args as needed.
    #[arg(short = 'd', long = "debug")]
    pub debug: Option<String>,

    /// Path to the target plist - if missing, opens in interactive mode
    pub plist_path: Vec<PathBuf>,

    /// Settings file path (layered over the user settings file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Requested direction from `--debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugMode {
    On,
    Off,
    Toggle,
}

impl DebugMode {
    /// Normalize a `--debug` value. Unrecognized values mean toggle.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return DebugMode::Toggle;
        };
        match value.to_ascii_lowercase().as_str() {
            "on" | "yes" | "y" | "true" | "1" | "enable" | "enabled" => DebugMode::On,
            "off" | "no" | "n" | "false" | "0" | "disable" | "disabled" => DebugMode::Off,
            _ => DebugMode::Toggle,
        }
    }

    /// Whether to enable, given the document's current state.
    pub fn resolve(self, current: DebugState) -> bool {
        match self {
            DebugMode::On => true,
            DebugMode::Off => false,
            DebugMode::Toggle => current.toggled(),
        }
    }
}

/// What the binary should do for a parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Non-interactive: edit the first given plist.
    Batch { plist: PathBuf, mode: DebugMode },
    /// Menu loop.
    Interactive,
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        match self.plist_path.first() {
            Some(plist) => Invocation::Batch {
                plist: plist.clone(),
                mode: DebugMode::parse(self.debug.as_deref()),
            },
            None => Invocation::Interactive,
        }
    }
}
