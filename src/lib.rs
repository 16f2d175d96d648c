//! Toggle Debug: kernel/firmware debug switches for OpenCore config.plist files
//!
//! Flips `Misc.Debug` and the debug boot-args on or off, and detects whether
//! debugging is currently enabled, disabled, or only partly set.

pub mod boot_args;
pub mod cli;
pub mod config;
pub mod detect;
pub mod document;
pub mod error;
pub mod logging;
pub mod plist_io;
pub mod schema;
pub mod toggle;
