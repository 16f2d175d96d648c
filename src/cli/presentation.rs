//! CLI presentation: text formatters for detection and toggle results.

mod detection;
mod toggle;

pub use detection::{format_detection_report, format_section_heading};
pub use toggle::{format_toggle_header, format_toggle_report};
