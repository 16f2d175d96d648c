//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ToggleError;

/// Map domain errors to the message shown to the user.
pub fn map_error(e: &ToggleError) -> String {
    match e {
        ToggleError::Read { path, source } => {
            format!("Failed to load {}:\n{}", path.display(), source)
        }
        ToggleError::Load { path, source } => {
            format!("Failed to load {}:\n{}", path.display(), source)
        }
        ToggleError::RootNotDictionary { path } => {
            format!("Failed to load {}:\nPlist root is not a dictionary", path.display())
        }
        ToggleError::Save { path, source } => {
            format!("Failed to save {}:\n{}", path.display(), source)
        }
        other => other.to_string(),
    }
}
