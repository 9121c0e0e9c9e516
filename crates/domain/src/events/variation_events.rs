//! Variation store mutation outcomes.

use crate::value_objects::Variation;

/// Outcome of mutating a `VariationStore`.
///
/// Row indices are display rows: row 0 is the default image, the last row
/// is the "add new" placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariationStoreUpdate {
    /// Store fields were filled in from persisted data or the scene image.
    Hydrated { variation_count: usize },
    /// Store was already hydrated; nothing changed.
    AlreadyHydrated,
    /// A variation now occupies display row `row`.
    VariationAdded { row: usize, variation: Variation },
    /// Several variations were appended starting at display row `first_row`.
    VariationsAppended { first_row: usize, count: usize },
    /// The variation at display row `row` was removed.
    VariationRemoved { row: usize, variation: Variation },
    /// Removal was a no-op (default row, placeholder row, or out of range).
    RemoveIgnored { row: usize },
}
