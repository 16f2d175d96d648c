//! Plist load/save for the target config.plist.
//!
//! The document is read fully into memory, and written back in the format it
//! was read in. Saving overwrites the file in place.

use crate::document::Document;
use crate::error::ToggleError;
use plist::Value;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

const BINARY_MAGIC: &[u8] = b"bplist00";

/// On-disk plist encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlistFormat {
    #[default]
    Xml,
    Binary,
}

impl PlistFormat {
    fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(BINARY_MAGIC) {
            PlistFormat::Binary
        } else {
            PlistFormat::Xml
        }
    }
}

/// A document together with the encoding it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedPlist {
    pub document: Document,
    pub format: PlistFormat,
}

/// Load a plist whose root must be a dictionary.
pub fn load(path: &Path) -> Result<LoadedPlist, ToggleError> {
    let bytes = fs::read(path).map_err(|source| ToggleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = PlistFormat::sniff(&bytes);
    let value = Value::from_reader(Cursor::new(bytes)).map_err(|source| ToggleError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let document = Document::from_value(value).ok_or_else(|| ToggleError::RootNotDictionary {
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), ?format, "Loaded plist");
    Ok(LoadedPlist { document, format })
}

/// Write `document` to `path` in `format`. The root is serialized in place.
pub fn save(document: &Document, path: &Path, format: PlistFormat) -> Result<(), ToggleError> {
    let result = match format {
        PlistFormat::Xml => plist::to_file_xml(path, document.root()),
        PlistFormat::Binary => plist::to_file_binary(path, document.root()),
    };
    result.map_err(|source| ToggleError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), ?format, "Saved plist");
    Ok(())
}
