//! Scenery domain: background variations of a scene and who sees which.
//!
//! Pure data and invariants. Persistence, directory listing and drawing are
//! ports owned by `scenery-engine`.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use aggregates::{
    resolve, RoleSelection, SceneryData, VariationStore, DEFAULT_IMAGE_REQUIRED,
    ROLE_IMAGE_REQUIRED, SCENERY_FLAG_KEY, SCENERY_FLAG_SCOPE,
};
pub use error::DomainError;
pub use events::VariationStoreUpdate;
pub use ids::SceneId;
pub use types::ViewerRole;
pub use value_objects::{
    derive_variation_name, file_name, file_stem, is_variation_of, match_variations, ImageRef,
    Variation, DEFAULT_VARIATION_NAME,
};
