//! Enable/disable debugging in a config.plist.
//!
//! Applies the descriptor table for the requested mode, rewrites
//! `boot-args`, and makes sure `boot-args` is listed under NVRAM Delete so
//! the new value replaces whatever is stored in NVRAM at boot.

use crate::boot_args::{adjust_boot_args, normalize};
use crate::document::{Document, MergeOutcome};
use crate::error::ToggleError;
use crate::plist_io;
use crate::schema::{edits_for, BOOT_ARGS_KEY, NVRAM_ADD_GUID, NVRAM_DELETE, NVRAM_GUID};
use plist::Value;
use std::path::Path;
use tracing::{debug, info};

/// What a toggle changed, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleReport {
    pub enable: bool,
    /// Forced `(key, value)` pairs, in table order.
    pub forced: Vec<(String, String)>,
    /// Whitespace-normalized boot-args before the change.
    pub original_boot_args: String,
    pub updated_boot_args: String,
    /// `boot-args` had to be added to NVRAM Delete.
    pub added_delete_entry: bool,
}

/// Apply the enable or disable edits to `doc` in place.
pub fn apply(doc: &mut Document, enable: bool) -> Result<ToggleReport, ToggleError> {
    let mut forced = Vec::new();
    for edit in edits_for(enable) {
        let outcome = doc.ensure_path(edit)?;
        debug!(key = edit.key, ?outcome, "Applied field edit");
        if edit.force && outcome == MergeOutcome::Written {
            forced.push((edit.key.to_string(), edit.value.to_string()));
        }
    }

    let original_boot_args = doc
        .dictionary_at(NVRAM_ADD_GUID)
        .and_then(|add| add.get(BOOT_ARGS_KEY))
        .and_then(Value::as_string)
        .map(normalize)
        .unwrap_or_default();
    let updated_boot_args = adjust_boot_args(&original_boot_args, enable);
    doc.set_string(NVRAM_ADD_GUID, BOOT_ARGS_KEY, updated_boot_args.clone())?;

    let added_delete_entry = doc.ensure_array_contains(NVRAM_DELETE, NVRAM_GUID, BOOT_ARGS_KEY)?;

    info!(
        enable,
        original = %original_boot_args,
        updated = %updated_boot_args,
        added_delete_entry,
        "Updated debug settings"
    );

    Ok(ToggleReport {
        enable,
        forced,
        original_boot_args,
        updated_boot_args,
        added_delete_entry,
    })
}

/// Load `path`, apply the toggle, and save it back in its original format.
pub fn run(path: &Path, enable: bool) -> Result<ToggleReport, ToggleError> {
    let mut loaded = plist_io::load(path)?;
    let report = apply(&mut loaded.document, enable)?;
    plist_io::save(&loaded.document, path, loaded.format)?;
    Ok(report)
}
