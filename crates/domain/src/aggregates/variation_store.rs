//! VariationStore aggregate - the editable variation set of an open form
//!
//! One store exists per editing session. It is hydrated when the editor
//! opens the form, mutated by add/remove/scan actions, and turned into
//! [`SceneryData`] on submit. Closing the form without submitting simply
//! drops the store.
//!
//! # Display rows
//!
//! The form renders the store as rows, and every index in this API is a
//! display row:
//!
//! | row          | content                                  |
//! |--------------|------------------------------------------|
//! | `0`          | the default image (never deletable)      |
//! | `1..=n`      | the variations, in insertion order       |
//! | `n + 1`      | an empty placeholder for "add new"       |

use crate::aggregates::scenery_data::SceneryData;
use crate::error::DomainError;
use crate::events::VariationStoreUpdate;
use crate::types::ViewerRole;
use crate::value_objects::{ImageRef, Variation, DEFAULT_VARIATION_NAME};

/// Message shown when a role binding points at a row without a file.
pub const ROLE_IMAGE_REQUIRED: &str = "GM & Player view must have a file";

/// Message shown when the default row has no file.
pub const DEFAULT_IMAGE_REQUIRED: &str = "Default image must have a file";

/// Which display rows the GM and player views are bound to on submit.
///
/// The form currently offers a single radio group, so [`RoleSelection::single`]
/// is what it sends; [`RoleSelection::split`] binds the roles independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSelection {
    gm_row: usize,
    player_row: Option<usize>,
}

impl RoleSelection {
    /// One selected row drives both roles.
    pub fn single(row: usize) -> Self {
        Self {
            gm_row: row,
            player_row: None,
        }
    }

    /// GM and player views bound to different rows.
    pub fn split(gm_row: usize, player_row: usize) -> Self {
        Self {
            gm_row,
            player_row: Some(player_row),
        }
    }

    /// Display row selected for `role`.
    pub fn row_for(&self, role: ViewerRole) -> usize {
        match role {
            ViewerRole::Gm => self.gm_row,
            ViewerRole::Player => self.player_row.unwrap_or(self.gm_row),
        }
    }
}

/// Editable variation set for one scene.
///
/// Fields start unset and are filled lazily by [`VariationStore::hydrate`],
/// once each, so re-rendering the form never clobbers the editor's changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariationStore {
    background: Option<ImageRef>,
    gm_image: Option<ImageRef>,
    pl_image: Option<ImageRef>,
    variations: Option<Vec<Variation>>,
}

impl VariationStore {
    // =========================================================================
    // Constructor / Hydration
    // =========================================================================

    /// Create an empty, unhydrated store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset fields from `prior` data, falling back to `default_image`.
    ///
    /// Fields that are already set are left alone, so calling this again
    /// after the editor made changes is a no-op.
    pub fn hydrate(
        &mut self,
        prior: Option<&SceneryData>,
        default_image: &ImageRef,
    ) -> VariationStoreUpdate {
        if self.is_hydrated() {
            return VariationStoreUpdate::AlreadyHydrated;
        }

        if self.background.is_none() {
            self.background = Some(
                prior
                    .map(|p| p.background().clone())
                    .unwrap_or_else(|| default_image.clone()),
            );
        }
        if self.gm_image.is_none() {
            self.gm_image = Some(
                prior
                    .map(|p| p.gm_image().clone())
                    .unwrap_or_else(|| default_image.clone()),
            );
        }
        if self.pl_image.is_none() {
            self.pl_image = Some(
                prior
                    .map(|p| p.pl_image().clone())
                    .unwrap_or_else(|| default_image.clone()),
            );
        }
        let variations = self
            .variations
            .get_or_insert_with(|| prior.map(|p| p.variations().to_vec()).unwrap_or_default());

        VariationStoreUpdate::Hydrated {
            variation_count: variations.len(),
        }
    }

    /// Whether every field has been set.
    pub fn is_hydrated(&self) -> bool {
        self.background.is_some()
            && self.gm_image.is_some()
            && self.pl_image.is_some()
            && self.variations.is_some()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the default image, once hydrated.
    #[inline]
    pub fn background(&self) -> Option<&ImageRef> {
        self.background.as_ref()
    }

    /// Returns the image currently bound to the GM view.
    #[inline]
    pub fn gm_image(&self) -> Option<&ImageRef> {
        self.gm_image.as_ref()
    }

    /// Returns the image currently bound to the player view.
    #[inline]
    pub fn pl_image(&self) -> Option<&ImageRef> {
        self.pl_image.as_ref()
    }

    /// Returns the variations (excluding the default row).
    #[inline]
    pub fn variations(&self) -> &[Variation] {
        self.variations.as_deref().unwrap_or_default()
    }

    /// Number of display rows, including the default and placeholder rows.
    pub fn row_count(&self) -> usize {
        self.variations().len() + 2
    }

    /// Rows to render: default image, variations, then one empty placeholder.
    pub fn list_for_display(&self) -> Vec<Variation> {
        let default_file = self
            .background
            .as_ref()
            .map(ImageRef::to_string)
            .unwrap_or_default();

        let mut rows = Vec::with_capacity(self.row_count());
        rows.push(Variation::new(DEFAULT_VARIATION_NAME, default_file));
        rows.extend(self.variations().iter().cloned());
        rows.push(Variation::placeholder());
        rows
    }

    /// Display row whose file matches the image bound to `role`.
    ///
    /// Used to pre-check the role selection when the form opens.
    pub fn selected_row(&self, role: ViewerRole) -> Option<usize> {
        let bound = match role {
            ViewerRole::Gm => self.gm_image.as_ref(),
            ViewerRole::Player => self.pl_image.as_ref(),
        }?;
        self.list_for_display()
            .iter()
            .position(|row| row.file == bound.as_str())
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Add a variation, appending it or inserting it at display row `at_row`.
    ///
    /// Row 0 belongs to the default image, so an insert there lands on row 1;
    /// rows past the end append. The returned `row` is where the variation
    /// actually landed, so `remove_variation` with that row undoes the add.
    /// Duplicate files are accepted here and collapsed on submit.
    pub fn add_variation(
        &mut self,
        name: impl Into<String>,
        file: impl Into<String>,
        at_row: Option<usize>,
    ) -> VariationStoreUpdate {
        let variation = Variation::new(name, file);
        let variations = self.variations.get_or_insert_with(Vec::new);

        let index = match at_row {
            Some(row) => row.max(1).saturating_sub(1).min(variations.len()),
            None => variations.len(),
        };
        variations.insert(index, variation.clone());

        VariationStoreUpdate::VariationAdded {
            row: index + 1,
            variation,
        }
    }

    /// Append several variations in order, e.g. the result of a scan.
    pub fn append_variations(
        &mut self,
        new_variations: impl IntoIterator<Item = Variation>,
    ) -> VariationStoreUpdate {
        let variations = self.variations.get_or_insert_with(Vec::new);
        let first_row = variations.len() + 1;
        let before = variations.len();
        variations.extend(new_variations);

        VariationStoreUpdate::VariationsAppended {
            first_row,
            count: variations.len() - before,
        }
    }

    /// Remove the variation at display row `row`.
    ///
    /// The default row, the placeholder row and rows that do not exist are
    /// ignored; the form may have already dropped the row from its DOM.
    pub fn remove_variation(&mut self, row: usize) -> VariationStoreUpdate {
        let Some(variations) = self.variations.as_mut() else {
            return VariationStoreUpdate::RemoveIgnored { row };
        };
        if row == 0 || row > variations.len() {
            return VariationStoreUpdate::RemoveIgnored { row };
        }

        let variation = variations.remove(row - 1);
        VariationStoreUpdate::VariationRemoved { row, variation }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate submitted form rows and build the data to persist.
    ///
    /// `rows` are display rows as the form holds them (row 0 is the default
    /// image, a trailing placeholder may be present). Rows without a file
    /// are dropped. Fails without building anything when a role points at
    /// a row without a file, or when the default row is empty.
    pub fn validate_and_build(
        rows: &[Variation],
        selection: RoleSelection,
    ) -> Result<SceneryData, DomainError> {
        let file_at = |row: usize| {
            rows.get(row)
                .filter(|v| v.has_file())
                .and_then(|v| ImageRef::new(v.file.as_str()).ok())
        };

        let gm_image = file_at(selection.row_for(ViewerRole::Gm));
        let pl_image = file_at(selection.row_for(ViewerRole::Player));
        let (Some(gm_image), Some(pl_image)) = (gm_image, pl_image) else {
            return Err(DomainError::validation(ROLE_IMAGE_REQUIRED));
        };

        let background =
            file_at(0).ok_or_else(|| DomainError::validation(DEFAULT_IMAGE_REQUIRED))?;

        let variations = rows.iter().skip(1).filter(|v| v.has_file()).cloned();

        Ok(SceneryData::new(background, variations, gm_image, pl_image))
    }

    /// Validate the store's own rows, see [`VariationStore::validate_and_build`].
    pub fn build(&self, selection: RoleSelection) -> Result<SceneryData, DomainError> {
        Self::validate_and_build(&self.list_for_display(), selection)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn img(s: &str) -> ImageRef {
        ImageRef::new(s).unwrap()
    }

    fn hydrated_store() -> VariationStore {
        let prior = SceneryData::new(
            img("maps/room.png"),
            vec![
                Variation::new("night", "maps/room-night.png"),
                Variation::new("day", "maps/room_day.png"),
            ],
            img("maps/room-night.png"),
            img("maps/room.png"),
        );
        let mut store = VariationStore::new();
        store.hydrate(Some(&prior), &img("maps/fallback.png"));
        store
    }

    mod hydration {
        use super::*;

        #[test]
        fn without_prior_data_uses_scene_image_everywhere() {
            let mut store = VariationStore::new();
            let update = store.hydrate(None, &img("maps/room.png"));

            assert_eq!(update, VariationStoreUpdate::Hydrated { variation_count: 0 });
            assert_eq!(store.background(), Some(&img("maps/room.png")));
            assert_eq!(store.gm_image(), Some(&img("maps/room.png")));
            assert_eq!(store.pl_image(), Some(&img("maps/room.png")));
            assert!(store.variations().is_empty());
        }

        #[test]
        fn with_prior_data_copies_it() {
            let store = hydrated_store();
            assert_eq!(store.background(), Some(&img("maps/room.png")));
            assert_eq!(store.gm_image(), Some(&img("maps/room-night.png")));
            assert_eq!(store.pl_image(), Some(&img("maps/room.png")));
            assert_eq!(store.variations().len(), 2);
        }

        #[test]
        fn second_hydrate_keeps_editor_changes() {
            let mut store = hydrated_store();
            store.add_variation("dusk", "maps/room-dusk.png", None);
            store.remove_variation(1);
            let before = store.clone();

            let update = store.hydrate(None, &img("maps/other.png"));

            assert_eq!(update, VariationStoreUpdate::AlreadyHydrated);
            assert_eq!(store, before);
        }

        #[test]
        fn rows_added_before_hydration_survive_it() {
            let mut store = VariationStore::new();
            store.add_variation("early", "early.png", None);
            store.hydrate(None, &img("room.png"));

            assert_eq!(store.variations(), &[Variation::new("early", "early.png")]);
            assert_eq!(store.background(), Some(&img("room.png")));
        }
    }

    mod display {
        use super::*;

        #[test]
        fn rows_are_default_variations_then_placeholder() {
            let store = hydrated_store();
            let rows = store.list_for_display();

            assert_eq!(rows.len(), 1 + store.variations().len() + 1);
            assert_eq!(rows[0], Variation::new("Default", "maps/room.png"));
            assert_eq!(rows[1].name, "night");
            assert_eq!(rows[2].name, "day");
            assert!(!rows[3].has_file());
        }

        #[test]
        fn listing_twice_does_not_grow_the_store() {
            let store = hydrated_store();
            let first = store.list_for_display();
            let second = store.list_for_display();
            assert_eq!(first, second);
            assert_eq!(store.row_count(), first.len());
        }

        #[test]
        fn unhydrated_store_still_has_default_and_placeholder() {
            let rows = VariationStore::new().list_for_display();
            assert_eq!(rows.len(), 2);
            assert!(!rows[0].has_file());
            assert!(!rows[1].has_file());
        }

        #[test]
        fn selected_row_finds_bound_images() {
            let store = hydrated_store();
            assert_eq!(store.selected_row(ViewerRole::Gm), Some(1));
            assert_eq!(store.selected_row(ViewerRole::Player), Some(0));
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn add_without_index_appends() {
            let mut store = hydrated_store();
            let update = store.add_variation("dusk", "maps/room-dusk.png", None);

            assert_eq!(
                update,
                VariationStoreUpdate::VariationAdded {
                    row: 3,
                    variation: Variation::new("dusk", "maps/room-dusk.png"),
                }
            );
            assert_eq!(store.variations()[2].name, "dusk");
        }

        #[test]
        fn add_at_row_inserts_there() {
            let mut store = hydrated_store();
            store.add_variation("dusk", "maps/room-dusk.png", Some(2));

            let names: Vec<_> = store.variations().iter().map(|v| v.name.as_str()).collect();
            assert_eq!(names, ["night", "dusk", "day"]);
        }

        #[test]
        fn add_at_default_row_lands_on_first_variation() {
            let mut store = hydrated_store();
            let update = store.add_variation("dusk", "maps/room-dusk.png", Some(0));

            assert!(matches!(update, VariationStoreUpdate::VariationAdded { row: 1, .. }));
            assert_eq!(store.list_for_display()[0].name, "Default");
        }

        #[test]
        fn add_past_end_appends() {
            let mut store = hydrated_store();
            let update = store.add_variation("dusk", "maps/room-dusk.png", Some(99));
            assert!(matches!(update, VariationStoreUpdate::VariationAdded { row: 3, .. }));
        }

        #[test]
        fn duplicates_are_accepted_while_editing() {
            let mut store = hydrated_store();
            store.add_variation("again", "maps/room-night.png", None);
            assert_eq!(store.variations().len(), 3);
        }

        #[test]
        fn add_then_remove_at_same_row_restores_store() {
            for row in 1..=3 {
                let mut store = hydrated_store();
                let before = store.clone();

                let update = store.add_variation("tmp", "tmp.png", Some(row));
                let VariationStoreUpdate::VariationAdded { row: added, .. } = &update else {
                    panic!("expected VariationAdded, got {update:?}");
                };
                assert_eq!(*added, row);
                store.remove_variation(row);

                assert_eq!(store, before);
            }
        }

        #[test]
        fn clamped_add_is_undone_through_the_reported_row() {
            for at_row in [Some(0), Some(99), None] {
                let mut store = hydrated_store();
                let before = store.clone();

                let update = store.add_variation("tmp", "tmp.png", at_row);
                let VariationStoreUpdate::VariationAdded { row, .. } = &update else {
                    panic!("expected VariationAdded, got {update:?}");
                };
                let row = *row;
                assert_eq!(store.list_for_display()[row].file, "tmp.png");
                store.remove_variation(row);

                assert_eq!(store, before, "insert at {at_row:?}");
            }
        }

        #[test]
        fn remove_out_of_range_is_ignored() {
            let mut store = hydrated_store();
            let before = store.clone();

            assert_eq!(
                store.remove_variation(42),
                VariationStoreUpdate::RemoveIgnored { row: 42 }
            );
            assert_eq!(store, before);
        }

        #[test]
        fn default_and_placeholder_rows_cannot_be_removed() {
            let mut store = hydrated_store();
            let before = store.clone();

            assert!(matches!(
                store.remove_variation(0),
                VariationStoreUpdate::RemoveIgnored { row: 0 }
            ));
            let placeholder_row = store.row_count() - 1;
            assert!(matches!(
                store.remove_variation(placeholder_row),
                VariationStoreUpdate::RemoveIgnored { .. }
            ));
            assert_eq!(store, before);
        }

        #[test]
        fn remove_returns_removed_variation() {
            let mut store = hydrated_store();
            assert_eq!(
                store.remove_variation(1),
                VariationStoreUpdate::VariationRemoved {
                    row: 1,
                    variation: Variation::new("night", "maps/room-night.png"),
                }
            );
            assert_eq!(store.variations().len(), 1);
        }

        #[test]
        fn append_reports_first_row_and_count() {
            let mut store = hydrated_store();
            let update = store.append_variations(vec![
                Variation::new("a", "a.png"),
                Variation::new("b", "b.png"),
            ]);
            assert_eq!(
                update,
                VariationStoreUpdate::VariationsAppended { first_row: 3, count: 2 }
            );
            assert_eq!(store.row_count(), 6);
        }
    }

    mod validation {
        use super::*;

        fn rows(entries: &[(&str, &str)]) -> Vec<Variation> {
            entries
                .iter()
                .map(|(name, file)| Variation::new(*name, *file))
                .collect()
        }

        #[test]
        fn empty_file_rows_are_stripped() {
            let input = rows(&[("Default", "room.png"), ("A", ""), ("B", "b.png"), ("", "")]);
            let data = VariationStore::validate_and_build(&input, RoleSelection::single(2)).unwrap();

            assert_eq!(data.variations(), &[Variation::new("B", "b.png")]);
            assert_eq!(data.background().as_str(), "room.png");
        }

        #[test]
        fn single_selection_binds_both_roles() {
            let input = rows(&[("Default", "room.png"), ("B", "b.png"), ("", "")]);
            let data = VariationStore::validate_and_build(&input, RoleSelection::single(1)).unwrap();

            assert_eq!(data.gm_image().as_str(), "b.png");
            assert_eq!(data.pl_image().as_str(), "b.png");
        }

        #[test]
        fn split_selection_binds_roles_independently() {
            let input = rows(&[("Default", "room.png"), ("B", "b.png"), ("", "")]);
            let data =
                VariationStore::validate_and_build(&input, RoleSelection::split(1, 0)).unwrap();

            assert_eq!(data.gm_image().as_str(), "b.png");
            assert_eq!(data.pl_image().as_str(), "room.png");
        }

        #[test]
        fn selecting_an_empty_row_is_rejected() {
            let input = rows(&[
                ("Default", "room.png"),
                ("A", ""),
                ("B", "b.png"),
                ("C", "c.png"),
                ("", ""),
            ]);
            for selection in [
                RoleSelection::single(1),
                RoleSelection::single(4),
                RoleSelection::split(2, 1),
                RoleSelection::split(1, 2),
            ] {
                let err = VariationStore::validate_and_build(&input, selection).unwrap_err();
                assert_eq!(err, DomainError::validation(ROLE_IMAGE_REQUIRED));
                assert_eq!(err.to_string(), "GM & Player view must have a file");
            }
        }

        #[test]
        fn selecting_a_missing_row_is_rejected() {
            let input = rows(&[("Default", "room.png"), ("", "")]);
            let err = VariationStore::validate_and_build(&input, RoleSelection::single(7)).unwrap_err();
            assert_eq!(err, DomainError::validation(ROLE_IMAGE_REQUIRED));
        }

        #[test]
        fn empty_default_row_is_rejected() {
            let input = rows(&[("Default", ""), ("B", "b.png"), ("", "")]);
            let err = VariationStore::validate_and_build(&input, RoleSelection::single(1)).unwrap_err();
            assert_eq!(err, DomainError::validation(DEFAULT_IMAGE_REQUIRED));
        }

        #[test]
        fn filled_placeholder_row_becomes_a_variation() {
            let input = rows(&[("Default", "room.png"), ("new", "new.png")]);
            let data = VariationStore::validate_and_build(&input, RoleSelection::single(0)).unwrap();
            assert_eq!(data.variations(), &[Variation::new("new", "new.png")]);
        }

        #[test]
        fn build_from_store_resolves_for_both_roles() {
            let store = hydrated_store();
            let data = store.build(RoleSelection::split(1, 2)).unwrap();

            assert_eq!(data.image_for(ViewerRole::Gm).as_str(), "maps/room-night.png");
            assert_eq!(data.image_for(ViewerRole::Player).as_str(), "maps/room_day.png");
            assert!(data.contains_file(data.gm_image().as_str()));
        }

        #[test]
        fn failed_build_leaves_store_untouched() {
            let store = hydrated_store();
            let before = store.clone();
            let placeholder_row = store.row_count() - 1;

            assert!(store.build(RoleSelection::single(placeholder_row)).is_err());
            assert_eq!(store, before);
        }
    }
}
