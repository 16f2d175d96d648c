//! Shared test utilities for integration tests
//!
//! Builds config.plist fixtures on disk and runs the toggle-debug binary with
//! an isolated HOME so no user settings file leaks into a test.

use plist::{Dictionary, Value};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use toggle_debug::document::Document;
use toggle_debug::schema::NVRAM_GUID;

/// A realistic OpenCore config.plist with debugging off and unrelated settings.
pub const CONFIG_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>Kernel</key>
	<dict>
		<key>Quirks</key>
		<dict>
			<key>DisableIoMapper</key>
			<true/>
		</dict>
	</dict>
	<key>Misc</key>
	<dict>
		<key>Debug</key>
		<dict>
			<key>AppleDebug</key>
			<false/>
			<key>ApplePanic</key>
			<false/>
			<key>DisableWatchDog</key>
			<true/>
			<key>DisplayLevel</key>
			<integer>0</integer>
			<key>Target</key>
			<integer>0</integer>
		</dict>
	</dict>
	<key>NVRAM</key>
	<dict>
		<key>Add</key>
		<dict>
			<key>7C436110-AB2A-4BBB-A880-FE41995C9F82</key>
			<dict>
				<key>boot-args</key>
				<string>alcid=11  agdpmod=pikera</string>
				<key>csr-active-config</key>
				<data>AAAAAA==</data>
			</dict>
		</dict>
		<key>Delete</key>
		<dict>
			<key>7C436110-AB2A-4BBB-A880-FE41995C9F82</key>
			<array>
				<string>csr-active-config</string>
			</array>
		</dict>
	</dict>
	<key>UEFI</key>
	<dict>
		<key>Drivers</key>
		<array>
			<dict>
				<key>Enabled</key>
				<true/>
				<key>Path</key>
				<string>OpenRuntime.efi</string>
			</dict>
		</array>
	</dict>
</dict>
</plist>
"#;

/// Scratch directory holding a config.plist and an isolated HOME.
pub struct Fixture {
    pub dir: TempDir,
    pub plist: PathBuf,
}

impl Fixture {
    pub fn new(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let plist = dir.path().join("config.plist");
        std::fs::write(&plist, contents).unwrap();
        std::fs::create_dir_all(dir.path().join("home")).unwrap();
        Self { dir, plist }
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn document(&self) -> Document {
        toggle_debug::plist_io::load(&self.plist).unwrap().document
    }

    /// Run the binary with `args` followed by the fixture plist path.
    pub fn run(&self, args: &[&str]) -> Output {
        run_binary(&self.home(), args, Some(&self.plist))
    }
}

pub fn run_binary(home: &Path, args: &[&str], plist: Option<&Path>) -> Output {
    let bin = env!("CARGO_BIN_EXE_toggle-debug");
    let mut command = Command::new(bin);
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TOGGLE_DEBUG_LOG")
        .args(args);
    if let Some(plist) = plist {
        command.arg(plist);
    }
    command.output().unwrap()
}

pub fn boot_args(doc: &Document) -> Option<String> {
    doc.lookup(&["NVRAM", "Add", NVRAM_GUID, "boot-args"])
        .and_then(Value::as_string)
        .map(str::to_string)
}

pub fn delete_entries(doc: &Document) -> Vec<String> {
    doc.lookup(&["NVRAM", "Delete", NVRAM_GUID])
        .and_then(Value::as_array)
        .map(|a| {
            a.iter()
                .filter_map(Value::as_string)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn misc_debug(doc: &Document, key: &str) -> Option<Value> {
    doc.lookup(&["Misc", "Debug", key]).cloned()
}

pub fn dict(entries: Vec<(&str, Value)>) -> Value {
    let mut d = Dictionary::new();
    for (k, v) in entries {
        d.insert(k.to_string(), v);
    }
    Value::Dictionary(d)
}
