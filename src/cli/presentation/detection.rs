//! Detection presentation: current plist and its debug fields.

use crate::detect::DebugSnapshot;
use crate::document::display_value;
use crate::schema::DISPLAY_LEVEL_RECOMMENDED;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::{OwoColorize, Stream, Style};
use std::path::Path;

/// Format a section heading with bold/underline. Plain when stdout is not a
/// color terminal or `NO_COLOR` is set.
pub fn format_section_heading(title: &str) -> String {
    let style = Style::new().bold().underline();
    format!(
        "{}",
        title.if_supports_color(Stream::Stdout, |text| text.style(style))
    )
}

fn warning(text: &str) -> String {
    format!(
        "{}",
        text.if_supports_color(Stream::Stdout, |text| text.yellow())
    )
}

/// Format the detected debug fields of `path`, with warnings for
/// configurations where boot-args may not take effect.
pub fn format_detection_report(path: &Path, snapshot: &DebugSnapshot) -> String {
    let mut out = format!("Current plist: {}\n", path.display());

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Field", "Value"]);
    let boot_args = if snapshot.boot_args.is_empty() {
        "None set".to_string()
    } else {
        snapshot.boot_args.clone()
    };
    table.add_row(vec!["Boot args".to_string(), boot_args]);
    table.add_row(vec!["AppleDebug".to_string(), display_value(&snapshot.apple_debug)]);
    table.add_row(vec!["ApplePanic".to_string(), display_value(&snapshot.apple_panic)]);
    table.add_row(vec!["Target".to_string(), display_value(&snapshot.target)]);
    table.add_row(vec![
        "DisplayLevel".to_string(),
        display_value(&snapshot.display_level),
    ]);
    table.add_row(vec!["State".to_string(), snapshot.state().to_string()]);
    out.push_str(&format!("{}\n", table));

    if !snapshot.boot_args.is_empty() {
        if !snapshot.boot_args_delete {
            out.push_str(&warning(
                " --> Only in NVRAM -> Add, may not be set properly!",
            ));
            out.push('\n');
        }
        if snapshot.emulated_nvram {
            out.push_str(&warning(
                " --> Detected OpenVariableRuntimeDxe, boot-args will not be set!",
            ));
            out.push('\n');
        }
    }
    if snapshot.display_level_warning() {
        out.push_str(&warning(&format!(
            " --> DisplayLevel is 0, {} (0x{:X}) is recommended!",
            DISPLAY_LEVEL_RECOMMENDED, DISPLAY_LEVEL_RECOMMENDED
        )));
        out.push('\n');
    }
    out
}
