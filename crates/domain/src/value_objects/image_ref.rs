//! Validated image reference newtype
//!
//! An `ImageRef` is a path or URL pointing at an image resource, e.g.
//! `worlds/keep/maps/room-night.webp`. Paths are `/`-separated regardless
//! of platform, matching how the host storage addresses files.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated image reference (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

impl ImageRef {
    /// Create a new validated image reference.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the reference is empty after trimming.
    pub fn new(reference: impl Into<String>) -> Result<Self, DomainError> {
        let reference = reference.into();
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Image reference cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last path segment, e.g. `room-night.webp`.
    pub fn file_name(&self) -> &str {
        file_name(&self.0)
    }

    /// The file name without its last extension, e.g. `room-night`.
    pub fn stem(&self) -> &str {
        file_stem(&self.0)
    }

    /// Everything before the last `/`, or `""` for a bare file name.
    pub fn parent(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }
}

/// Last `/`-separated segment of a path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// File name of a path with its last extension removed.
///
/// A name without a dot is returned whole. A leading dot alone
/// (`.hidden`) yields an empty stem.
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageRef {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ImageRef {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> String {
        image.0
    }
}
