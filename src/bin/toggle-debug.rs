//! Toggle Debug CLI Binary
//!
//! With a plist path, toggles debugging non-interactively; without one, opens
//! the interactive menu.

use clap::Parser;
use std::process;
use toggle_debug::cli::{map_error, Cli, RunContext};
use toggle_debug::config::{ConfigLoader, ToolConfig};
use toggle_debug::logging::{init_logging, LoggingConfig};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Toggle Debug starting");

    let context = RunContext::new(config);
    match context.execute(&cli.invocation()) {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// An explicit --config must load; the user settings file falls back to defaults.
fn load_config(cli: &Cli) -> Result<ToolConfig, toggle_debug::error::ToggleError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => Ok(ConfigLoader::load().unwrap_or_else(|e| {
            eprintln!("Warning: ignoring user settings: {}", map_error(&e));
            ToolConfig::default()
        })),
    }
}

/// Build logging configuration from CLI args and the settings file.
/// Precedence: CLI flags override settings file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.verbose && config.level == "off" {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
