//! Fixed config.plist locations and the enable/disable descriptor tables.

use crate::document::{FieldEdit, FieldValue, ValueKind};

/// Apple boot variable GUID holding `boot-args`.
pub const NVRAM_GUID: &str = "7C436110-AB2A-4BBB-A880-FE41995C9F82";

pub const BOOT_ARGS_KEY: &str = "boot-args";

pub const MISC_DEBUG: &[&str] = &["Misc", "Debug"];
pub const NVRAM_ADD: &[&str] = &["NVRAM", "Add"];
pub const NVRAM_DELETE: &[&str] = &["NVRAM", "Delete"];
pub const NVRAM_ADD_GUID: &[&str] = &["NVRAM", "Add", NVRAM_GUID];
pub const UEFI_DRIVERS: &[&str] = &["UEFI", "Drivers"];

/// `Misc.Debug.Target` value that marks debugging as enabled.
pub const TARGET_ENABLED: i64 = 67;

/// Recommended `Misc.Debug.DisplayLevel` (0x80000042).
pub const DISPLAY_LEVEL_RECOMMENDED: i64 = 2147483714;

/// Driver that emulates NVRAM and can swallow boot-args writes.
pub const EMULATED_NVRAM_DRIVER: &str = "OpenVariableRuntimeDxe.efi";

const fn misc_debug(key: &'static str, value: FieldValue, expected: ValueKind) -> FieldEdit<'static> {
    FieldEdit {
        path: MISC_DEBUG,
        key,
        expected: Some(expected),
        value,
        force: true,
    }
}

const NVRAM_ADD_ENTRY: FieldEdit<'static> = FieldEdit {
    path: NVRAM_ADD,
    key: NVRAM_GUID,
    expected: Some(ValueKind::Dictionary),
    value: FieldValue::EmptyDictionary,
    force: false,
};

const NVRAM_DELETE_ENTRY: FieldEdit<'static> = FieldEdit {
    path: NVRAM_DELETE,
    key: NVRAM_GUID,
    expected: Some(ValueKind::Array),
    value: FieldValue::EmptyArray,
    force: false,
};

/// Edits applied when enabling debugging.
pub static DEBUG_ON: [FieldEdit<'static>; 6] = [
    misc_debug("AppleDebug", FieldValue::Boolean(true), ValueKind::Boolean),
    misc_debug("ApplePanic", FieldValue::Boolean(true), ValueKind::Boolean),
    misc_debug("Target", FieldValue::Integer(TARGET_ENABLED), ValueKind::Integer),
    misc_debug(
        "DisplayLevel",
        FieldValue::Integer(DISPLAY_LEVEL_RECOMMENDED),
        ValueKind::Integer,
    ),
    NVRAM_ADD_ENTRY,
    NVRAM_DELETE_ENTRY,
];

/// Edits applied when disabling debugging.
pub static DEBUG_OFF: [FieldEdit<'static>; 6] = [
    misc_debug("AppleDebug", FieldValue::Boolean(false), ValueKind::Boolean),
    misc_debug("ApplePanic", FieldValue::Boolean(false), ValueKind::Boolean),
    misc_debug("Target", FieldValue::Integer(0), ValueKind::Integer),
    misc_debug(
        "DisplayLevel",
        FieldValue::Integer(DISPLAY_LEVEL_RECOMMENDED),
        ValueKind::Integer,
    ),
    NVRAM_ADD_ENTRY,
    NVRAM_DELETE_ENTRY,
];

/// Descriptor table for a mode.
pub fn edits_for(enable: bool) -> &'static [FieldEdit<'static>; 6] {
    if enable {
        &DEBUG_ON
    } else {
        &DEBUG_OFF
    }
}
