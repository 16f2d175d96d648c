//! Debug state detection.
//!
//! Reads the debug-related fields of a config.plist into a [`DebugSnapshot`]
//! and classifies the overall state as enabled, disabled, or mixed.

use crate::boot_args::split_boot_args;
use crate::document::{array_contains_string, is_truthy, Document};
use crate::schema::{
    BOOT_ARGS_KEY, DISPLAY_LEVEL_RECOMMENDED, EMULATED_NVRAM_DRIVER, MISC_DEBUG, NVRAM_DELETE,
    NVRAM_GUID, NVRAM_ADD_GUID, TARGET_ENABLED, UEFI_DRIVERS,
};
use plist::Value;
use std::fmt;
use tracing::debug;

/// Debug-related values read from a document. Computed fresh on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugSnapshot {
    /// Raw `boot-args` from NVRAM Add, empty when unset.
    pub boot_args: String,
    /// Debug tokens found in `boot_args`.
    pub boot_args_debug: Vec<String>,
    /// Whether `boot-args` is listed in NVRAM Delete.
    pub boot_args_delete: bool,
    pub apple_debug: Value,
    pub apple_panic: Value,
    pub target: Value,
    pub display_level: Value,
    /// An enabled OpenVariableRuntimeDxe.efi driver is present.
    pub emulated_nvram: bool,
}

impl Default for DebugSnapshot {
    fn default() -> Self {
        Self {
            boot_args: String::new(),
            boot_args_debug: Vec::new(),
            boot_args_delete: false,
            apple_debug: Value::Boolean(false),
            apple_panic: Value::Boolean(false),
            target: Value::from(0i64),
            display_level: Value::from(DISPLAY_LEVEL_RECOMMENDED),
            emulated_nvram: false,
        }
    }
}

impl DebugSnapshot {
    /// Target counts when it equals the enabled sentinel or is otherwise truthy.
    fn target_signal(&self) -> bool {
        self.target.as_signed_integer() == Some(TARGET_ENABLED) || is_truthy(&self.target)
    }

    /// Number of debug signals present, out of four.
    pub fn signal_count(&self) -> usize {
        [
            !self.boot_args_debug.is_empty(),
            is_truthy(&self.apple_debug),
            is_truthy(&self.apple_panic),
            self.target_signal(),
        ]
        .iter()
        .filter(|signal| **signal)
        .count()
    }

    pub fn state(&self) -> DebugState {
        match self.signal_count() {
            4 => DebugState::Enabled,
            0 => DebugState::Disabled,
            _ => DebugState::Mixed,
        }
    }

    /// True when a non-zero Target is paired with a zero DisplayLevel.
    pub fn display_level_warning(&self) -> bool {
        let target_set = self.target.as_signed_integer().is_some_and(|t| t != 0);
        let display_zero = self.display_level.as_signed_integer() == Some(0);
        target_set && display_zero
    }
}

/// Overall debug state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugState {
    Enabled,
    Disabled,
    Mixed,
}

impl DebugState {
    /// Toggle direction: enable unless debugging is confirmed fully on.
    pub fn toggled(self) -> bool {
        self != DebugState::Enabled
    }
}

impl fmt::Display for DebugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugState::Enabled => write!(f, "enabled"),
            DebugState::Disabled => write!(f, "disabled"),
            DebugState::Mixed => write!(f, "mixed"),
        }
    }
}

/// Build a snapshot of the debug-related fields of `doc`.
pub fn detect(doc: &Document) -> DebugSnapshot {
    let mut snapshot = DebugSnapshot::default();

    if let Some(section) = doc.dictionary_at(MISC_DEBUG) {
        for (key, slot) in [
            ("AppleDebug", &mut snapshot.apple_debug),
            ("ApplePanic", &mut snapshot.apple_panic),
            ("DisplayLevel", &mut snapshot.display_level),
            ("Target", &mut snapshot.target),
        ] {
            if let Some(value) = section.get(key) {
                *slot = value.clone();
            }
        }
    }

    if let Some(boot_args) = doc
        .dictionary_at(NVRAM_ADD_GUID)
        .and_then(|add| add.get(BOOT_ARGS_KEY))
        .and_then(Value::as_string)
    {
        snapshot.boot_args = boot_args.to_string();
        snapshot.boot_args_debug = split_boot_args(boot_args).debug;
    }

    snapshot.boot_args_delete = doc
        .dictionary_at(NVRAM_DELETE)
        .and_then(|delete| delete.get(NVRAM_GUID))
        .and_then(Value::as_array)
        .is_some_and(|keys| array_contains_string(keys, BOOT_ARGS_KEY));

    snapshot.emulated_nvram = doc
        .lookup(UEFI_DRIVERS)
        .and_then(Value::as_array)
        .is_some_and(|drivers| drivers.iter().any(is_emulated_nvram_driver));

    debug!(
        state = %snapshot.state(),
        boot_args = %snapshot.boot_args,
        boot_args_delete = snapshot.boot_args_delete,
        emulated_nvram = snapshot.emulated_nvram,
        "Detected debug state"
    );
    snapshot
}

/// Classify the debug state of `doc`.
pub fn debug_state(doc: &Document) -> DebugState {
    detect(doc).state()
}

/// Whether a `UEFI.Drivers` entry is an enabled emulated NVRAM driver.
///
/// Entries are either plain path strings or dictionaries with `Path` and
/// optional `Enabled`; anything else is skipped.
fn is_emulated_nvram_driver(driver: &Value) -> bool {
    let (path, enabled) = match driver {
        Value::String(path) => (path.as_str(), true),
        Value::Dictionary(entry) => {
            let Some(path) = entry.get("Path").and_then(Value::as_string) else {
                debug!("Skipping driver entry without a string Path");
                return false;
            };
            let enabled = entry.get("Enabled").map(is_truthy).unwrap_or(true);
            (path, enabled)
        }
        _ => return false,
    };
    enabled && path.eq_ignore_ascii_case(EMULATED_NVRAM_DRIVER)
}
