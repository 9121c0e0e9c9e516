//! Value objects - immutable data with validation
//!
//! Variations are plain editing rows; `ImageRef` is the validated form used
//! once data is persisted.

mod image_ref;
mod variation;
mod variation_naming;

pub use image_ref::{file_name, file_stem, ImageRef};
pub use variation::{Variation, DEFAULT_VARIATION_NAME};
pub use variation_naming::{derive_variation_name, is_variation_of, match_variations};
