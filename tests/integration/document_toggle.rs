//! Integration tests for toggling and detection through the library API.

use plist::Value;
use toggle_debug::detect::{debug_state, detect, DebugState};
use toggle_debug::document::Document;
use toggle_debug::plist_io::{self, PlistFormat};
use toggle_debug::toggle;

use crate::integration::test_utils::{dict, Fixture, CONFIG_PLIST};

fn debug_fields(doc: &Document) -> (Value, Value, Value, Vec<String>) {
    let snapshot = detect(doc);
    (
        snapshot.apple_debug,
        snapshot.apple_panic,
        snapshot.target,
        snapshot.boot_args_debug,
    )
}

#[test]
fn test_enable_disable_restores_debug_fields() {
    let fixture = Fixture::new(CONFIG_PLIST);
    let original = fixture.document();

    let mut doc = original.clone();
    toggle::apply(&mut doc, true).unwrap();
    assert_eq!(debug_state(&doc), DebugState::Enabled);
    toggle::apply(&mut doc, false).unwrap();

    assert_eq!(debug_fields(&doc), debug_fields(&original));
    assert_eq!(
        detect(&doc).display_level,
        Value::from(2147483714i64),
        "DisplayLevel is forced to the recommended value in both modes"
    );
}

#[test]
fn test_disable_enable_restores_enabled_fields() {
    let fixture = Fixture::new(CONFIG_PLIST);
    let mut enabled = fixture.document();
    toggle::apply(&mut enabled, true).unwrap();

    let mut doc = enabled.clone();
    toggle::apply(&mut doc, false).unwrap();
    toggle::apply(&mut doc, true).unwrap();
    assert_eq!(doc, enabled);
}

#[test]
fn test_run_preserves_binary_format() {
    let fixture = Fixture::new(CONFIG_PLIST);
    let loaded = plist_io::load(&fixture.plist).unwrap();
    plist_io::save(&loaded.document, &fixture.plist, PlistFormat::Binary).unwrap();

    let report = toggle::run(&fixture.plist, true).unwrap();
    assert!(report.enable);

    let bytes = std::fs::read(&fixture.plist).unwrap();
    assert!(bytes.starts_with(b"bplist00"));
    assert_eq!(debug_state(&fixture.document()), DebugState::Enabled);
}

#[test]
fn test_detects_emulated_nvram_and_missing_delete() {
    let mut root = fixture_root();
    let drivers = Value::Array(vec![
        dict(vec![
            ("Path", Value::String("OpenRuntime.efi".to_string())),
            ("Enabled", Value::Boolean(true)),
        ]),
        dict(vec![("Path", Value::String("OpenVariableRuntimeDxe.efi".to_string()))]),
    ]);
    root.insert("UEFI".to_string(), dict(vec![("Drivers", drivers)]));
    root.insert(
        "NVRAM".to_string(),
        dict(vec![(
            "Add",
            dict(vec![(
                toggle_debug::schema::NVRAM_GUID,
                dict(vec![("boot-args", Value::String("-v keepsyms=1".to_string()))]),
            )]),
        )]),
    );

    let snapshot = detect(&Document::new(root));
    assert!(snapshot.emulated_nvram);
    assert!(!snapshot.boot_args_delete);
    assert_eq!(snapshot.boot_args_debug, vec!["-v", "keepsyms=1"]);
    assert_eq!(snapshot.state(), DebugState::Mixed);
}

fn fixture_root() -> plist::Dictionary {
    let fixture = Fixture::new(CONFIG_PLIST);
    match fixture.document().into_value() {
        Value::Dictionary(root) => root,
        other => panic!("unexpected root {:?}", other),
    }
}
