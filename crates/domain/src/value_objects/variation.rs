//! A single candidate background image.

use serde::{Deserialize, Serialize};

/// Label shown for the implicit first row (the scene's default image).
pub const DEFAULT_VARIATION_NAME: &str = "Default";

/// One candidate image: a display label and a file reference.
///
/// While editing, either field may be empty (the "add new" placeholder row
/// has both empty). Persisted variations always carry a non-empty `file`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Variation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file: String,
}

impl Variation {
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }

    /// The trailing empty row used by the form to add a new variation.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Whether this row points at a file (after trimming).
    pub fn has_file(&self) -> bool {
        !self.file.trim().is_empty()
    }
}
