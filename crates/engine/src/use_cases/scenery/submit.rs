//! Submit use case - validates the editor form and persists it.

use std::sync::Arc;

use scenery_domain::{RoleSelection, SceneId, SceneryData, Variation, VariationStore, ViewerRole};

use super::SceneryError;
use crate::repositories::SceneryRepository;

/// Commits edited scenery.
///
/// On success the scene's base image becomes the default image and the
/// scenery flag is replaced in full. Nothing is written when validation
/// fails.
pub struct SubmitScenery {
    scenery: Arc<SceneryRepository>,
}

impl SubmitScenery {
    pub fn new(scenery: Arc<SceneryRepository>) -> Self {
        Self { scenery }
    }

    /// Validate `rows` (display rows, default first) and persist them.
    pub async fn execute(
        &self,
        scene_id: SceneId,
        editor: ViewerRole,
        rows: &[Variation],
        selection: RoleSelection,
    ) -> Result<SceneryData, SceneryError> {
        if !editor.is_privileged() {
            tracing::warn!(scene_id = %scene_id, role = %editor, "Rejected scenery submit");
            return Err(SceneryError::Unauthorized);
        }

        let data = VariationStore::validate_and_build(rows, selection)?;

        self.scenery
            .set_scene_image(scene_id, data.background().as_str())
            .await?;
        self.scenery.save(scene_id, &data).await?;

        tracing::info!(
            scene_id = %scene_id,
            background = %data.background(),
            gm_image = %data.gm_image(),
            pl_image = %data.pl_image(),
            variations = data.variations().len(),
            "Scenery saved"
        );

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockSceneFlagRepo, MockSceneRepo};
    use mockall::predicate::eq;
    use scenery_domain::{DomainError, ROLE_IMAGE_REQUIRED};

    fn rows() -> Vec<Variation> {
        vec![
            Variation::new("Default", "maps/room.png"),
            Variation::new("A", ""),
            Variation::new("night", "maps/room-night.png"),
            Variation::placeholder(),
        ]
    }

    fn use_case(flags: MockSceneFlagRepo, scenes: MockSceneRepo) -> SubmitScenery {
        SubmitScenery::new(Arc::new(SceneryRepository::new(
            Arc::new(flags),
            Arc::new(scenes),
        )))
    }

    #[tokio::test]
    async fn persists_scene_image_and_flag() {
        let scene_id = SceneId::new();

        let mut scenes = MockSceneRepo::new();
        scenes
            .expect_set_image()
            .with(eq(scene_id), eq("maps/room.png"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut flags = MockSceneFlagRepo::new();
        flags
            .expect_set_flag()
            .withf(move |id, scope, key, value| {
                *id == scene_id
                    && scope == "scenery"
                    && key == "data"
                    && value["gmImage"] == "maps/room-night.png"
                    && value["variations"].as_array().map(Vec::len) == Some(1)
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let data = use_case(flags, scenes)
            .execute(scene_id, ViewerRole::Gm, &rows(), RoleSelection::split(2, 0))
            .await
            .unwrap();

        assert_eq!(data.gm_image().as_str(), "maps/room-night.png");
        assert_eq!(data.pl_image().as_str(), "maps/room.png");
        assert_eq!(
            data.variations(),
            &[Variation::new("night", "maps/room-night.png")]
        );
    }

    #[tokio::test]
    async fn player_cannot_submit() {
        let mut scenes = MockSceneRepo::new();
        scenes.expect_set_image().never();
        let mut flags = MockSceneFlagRepo::new();
        flags.expect_set_flag().never();

        let err = use_case(flags, scenes)
            .execute(
                SceneId::new(),
                ViewerRole::Player,
                &rows(),
                RoleSelection::single(0),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, SceneryError::Unauthorized));
    }

    #[tokio::test]
    async fn selecting_an_empty_row_writes_nothing() {
        let mut scenes = MockSceneRepo::new();
        scenes.expect_set_image().never();
        let mut flags = MockSceneFlagRepo::new();
        flags.expect_set_flag().never();

        let err = use_case(flags, scenes)
            .execute(SceneId::new(), ViewerRole::Gm, &rows(), RoleSelection::single(1))
            .await
            .unwrap_err();

        match err {
            SceneryError::Validation(DomainError::Validation(msg)) => {
                assert_eq!(msg, ROLE_IMAGE_REQUIRED)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            SceneryError::Validation(DomainError::validation(ROLE_IMAGE_REQUIRED)).to_string(),
            "GM & Player view must have a file"
        );
    }
}
