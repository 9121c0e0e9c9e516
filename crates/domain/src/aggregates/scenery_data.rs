//! SceneryData aggregate - the persisted variation set of one scene
//!
//! This is what gets written to the scene's flag storage on submit and what
//! every viewer resolves against. It is replaced in full on each save,
//! never merged.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "background": "maps/room.png",
//!   "variations": [{ "name": "night", "file": "maps/room-night.png" }],
//!   "gmImage": "maps/room-night.png",
//!   "plImage": "maps/room.png"
//! }
//! ```
//!
//! Data written by older versions used the keys `bg`, `gm` and `pl`; those
//! are still accepted when reading.

use std::collections::HashSet;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::ViewerRole;
use crate::value_objects::{ImageRef, Variation};

/// Flag scope under which scenery data is stored on a scene.
pub const SCENERY_FLAG_SCOPE: &str = "scenery";

/// Flag key under which scenery data is stored on a scene.
pub const SCENERY_FLAG_KEY: &str = "data";

/// Persisted background configuration of a scene.
///
/// # Invariants
///
/// - `background`, `gm_image` and `pl_image` are non-empty (`ImageRef`)
/// - every variation has a non-empty `file`
/// - variation files are unique (first occurrence wins)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneryData {
    background: ImageRef,
    variations: Vec<Variation>,
    gm_image: ImageRef,
    pl_image: ImageRef,
}

impl SceneryData {
    /// Create scenery data, normalizing the variation list.
    ///
    /// Variations without a file are dropped and repeated files collapse
    /// onto their first occurrence.
    pub fn new(
        background: ImageRef,
        variations: impl IntoIterator<Item = Variation>,
        gm_image: ImageRef,
        pl_image: ImageRef,
    ) -> Self {
        Self {
            background,
            variations: normalize_variations(variations),
            gm_image,
            pl_image,
        }
    }

    /// Scenery with no variations where every role sees `image`.
    pub fn single(image: ImageRef) -> Self {
        Self::new(image.clone(), Vec::new(), image.clone(), image)
    }

    /// Returns the default image.
    #[inline]
    pub fn background(&self) -> &ImageRef {
        &self.background
    }

    /// Returns the variations in display order.
    #[inline]
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    /// Returns the image bound to the GM view.
    #[inline]
    pub fn gm_image(&self) -> &ImageRef {
        &self.gm_image
    }

    /// Returns the image bound to the player view.
    #[inline]
    pub fn pl_image(&self) -> &ImageRef {
        &self.pl_image
    }

    /// Returns the image a viewer with `role` should see.
    pub fn image_for(&self, role: ViewerRole) -> &ImageRef {
        match role {
            ViewerRole::Gm => &self.gm_image,
            ViewerRole::Player => &self.pl_image,
        }
    }

    /// Whether `file` is the background or one of the variations.
    pub fn contains_file(&self, file: &str) -> bool {
        self.background.as_str() == file || self.variations.iter().any(|v| v.file == file)
    }
}

/// Resolve the active image for a viewer.
///
/// Returns `None` when the scene has never been configured; the host's own
/// scene image stays in effect.
pub fn resolve(data: Option<&SceneryData>, role: ViewerRole) -> Option<&ImageRef> {
    data.map(|data| data.image_for(role))
}

fn normalize_variations(variations: impl IntoIterator<Item = Variation>) -> Vec<Variation> {
    let mut seen = HashSet::new();
    variations
        .into_iter()
        .filter(Variation::has_file)
        .map(|v| Variation::new(v.name, v.file.trim()))
        .filter(|v| seen.insert(v.file.clone()))
        .collect()
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the wire format.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneryDataWireFormat {
    #[serde(alias = "bg")]
    background: String,
    #[serde(default)]
    variations: Vec<Variation>,
    #[serde(alias = "gm")]
    gm_image: String,
    #[serde(alias = "pl")]
    pl_image: String,
}

impl Serialize for SceneryData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = SceneryDataWireFormat {
            background: self.background.to_string(),
            variations: self.variations.clone(),
            gm_image: self.gm_image.to_string(),
            pl_image: self.pl_image.to_string(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SceneryData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = SceneryDataWireFormat::deserialize(deserializer)?;

        let background = ImageRef::new(wire.background).map_err(DeError::custom)?;
        let gm_image = ImageRef::new(wire.gm_image).map_err(DeError::custom)?;
        let pl_image = ImageRef::new(wire.pl_image).map_err(DeError::custom)?;

        Ok(SceneryData::new(
            background,
            wire.variations,
            gm_image,
            pl_image,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
