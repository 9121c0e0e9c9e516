//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns update enums from mutations
//!
//! `VariationStore` is the editing-session aggregate; `SceneryData` is what
//! gets persisted and resolved.

pub mod scenery_data;
pub mod variation_store;

pub use scenery_data::{resolve, SceneryData, SCENERY_FLAG_KEY, SCENERY_FLAG_SCOPE};
pub use variation_store::{
    RoleSelection, VariationStore, DEFAULT_IMAGE_REQUIRED, ROLE_IMAGE_REQUIRED,
};
