//! Name-matching policy for scanned variations
//!
//! Given the default image and the files sitting next to it, decide which
//! siblings look like variations of it and what to call them:
//!
//! | base        | sibling              | candidate | name         |
//! |-------------|----------------------|-----------|--------------|
//! | `room.png`  | `room-night.png`     | yes       | `night`      |
//! | `room.png`  | `room_day_rain.webp` | yes       | `day rain`   |
//! | `room.png`  | `old-room.png`       | yes       | `old`        |
//! | `room.png`  | `hall.png`           | no        |              |
//! | `room.png`  | `room.png`           | no (self) |              |

use super::image_ref::file_stem;
use super::variation::Variation;

/// Derive a display name from a sibling stem by removing the base stem
/// (first occurrence), turning `-`/`_` into spaces and trimming.
pub fn derive_variation_name(base_stem: &str, sibling_stem: &str) -> String {
    sibling_stem
        .replacen(base_stem, "", 1)
        .replace(['-', '_'], " ")
        .trim()
        .to_string()
}

/// Whether `sibling` should be offered as a variation of `base`.
pub fn is_variation_of(base: &str, sibling: &str) -> bool {
    let base_stem = file_stem(base);
    if base_stem.is_empty() || sibling.trim() == base.trim() {
        return false;
    }
    file_stem(sibling).contains(base_stem)
}

/// Filter a directory listing down to variations of `base`.
///
/// Candidates keep the order of `siblings`; the listing order of the
/// storage backend is not re-sorted. A base without a usable stem yields
/// nothing, otherwise every file would match the empty string.
pub fn match_variations<'a, I>(base: &str, siblings: I) -> Vec<Variation>
where
    I: IntoIterator<Item = &'a str>,
{
    let base_stem = file_stem(base);
    siblings
        .into_iter()
        .filter(|sibling| is_variation_of(base, sibling))
        .map(|sibling| Variation::new(derive_variation_name(base_stem, file_stem(sibling)), sibling))
        .collect()
}
