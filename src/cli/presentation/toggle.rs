//! Toggle presentation: what was set and how boot-args changed.

use crate::toggle::ToggleReport;
use std::path::Path;

pub fn format_toggle_header(path: &Path, enable: bool) -> String {
    format!(
        "{} debugging for {}...",
        if enable { "Enabling" } else { "Disabling" },
        path.display()
    )
}

pub fn format_toggle_report(path: &Path, report: &ToggleReport) -> String {
    let mut lines = vec![
        format_toggle_header(path, report.enable),
        "Setting target values...".to_string(),
    ];
    for (key, value) in &report.forced {
        lines.push(format!(" - {} -> {}", key, value));
    }
    lines.push("Parsing boot-args...".to_string());
    lines.push(format!(" Original: {}", report.original_boot_args));
    let updated = if report.updated_boot_args.is_empty() {
        "None set"
    } else {
        report.updated_boot_args.as_str()
    };
    lines.push(format!("  Updated: {}", updated));
    if report.added_delete_entry {
        lines.push("Adding boot-args to NVRAM -> Delete...".to_string());
    }
    lines.push(String::new());
    lines.push("Done.".to_string());
    lines.join("\n")
}
