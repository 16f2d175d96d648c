//! CLI domain: parse, route, output, presentation, and the interactive menu.
//! No document logic; handlers call into `toggle`, `detect`, and `plist_io`.

mod interactive;
mod output;
mod parse;
mod presentation;
mod route;

pub use interactive::{clean_dropped_path, Session};
pub use output::map_error;
pub use parse::{Cli, DebugMode, Invocation};
pub use presentation::{format_detection_report, format_toggle_header, format_toggle_report};
pub use route::RunContext;
