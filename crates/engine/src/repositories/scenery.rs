//! Scenery persistence operations.
//!
//! Combines the scene's flag storage (where `SceneryData` lives) with the
//! scene document itself (its base image).

use std::sync::Arc;

use scenery_domain::{SceneId, SceneryData, SCENERY_FLAG_KEY, SCENERY_FLAG_SCOPE};

use crate::infrastructure::ports::{RepoError, SceneFlagRepo, SceneRepo};

/// Scenery data access.
pub struct SceneryRepository {
    flags: Arc<dyn SceneFlagRepo>,
    scenes: Arc<dyn SceneRepo>,
}

impl SceneryRepository {
    pub fn new(flags: Arc<dyn SceneFlagRepo>, scenes: Arc<dyn SceneRepo>) -> Self {
        Self { flags, scenes }
    }

    /// Load the persisted scenery data of a scene.
    ///
    /// `Ok(None)` means the scene was never configured.
    pub async fn load(&self, scene_id: SceneId) -> Result<Option<SceneryData>, RepoError> {
        let Some(value) = self.load_raw(scene_id).await? else {
            return Ok(None);
        };

        serde_json::from_value(value)
            .map(Some)
            .map_err(RepoError::serialization)
    }

    /// The stored flag value as-is, for readers that only need part of it.
    pub async fn load_raw(
        &self,
        scene_id: SceneId,
    ) -> Result<Option<serde_json::Value>, RepoError> {
        self.flags
            .get_flag(scene_id, SCENERY_FLAG_SCOPE, SCENERY_FLAG_KEY)
            .await
    }

    /// Replace the persisted scenery data of a scene.
    pub async fn save(&self, scene_id: SceneId, data: &SceneryData) -> Result<(), RepoError> {
        let value = serde_json::to_value(data).map_err(RepoError::serialization)?;
        self.flags
            .set_flag(scene_id, SCENERY_FLAG_SCOPE, SCENERY_FLAG_KEY, &value)
            .await
    }

    /// The scene's own base image, if any.
    pub async fn scene_image(&self, scene_id: SceneId) -> Result<Option<String>, RepoError> {
        self.scenes.get_image(scene_id).await
    }

    pub async fn set_scene_image(&self, scene_id: SceneId, image: &str) -> Result<(), RepoError> {
        self.scenes.set_image(scene_id, image).await
    }
}
