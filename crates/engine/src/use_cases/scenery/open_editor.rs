//! Open editor use case - builds the editing state for a scene.

use std::sync::Arc;

use scenery_domain::{ImageRef, SceneId, VariationStore};

use super::SceneryError;
use crate::infrastructure::ports::RepoError;
use crate::repositories::SceneryRepository;

/// Loads prior scenery data and hydrates a fresh [`VariationStore`].
///
/// Without prior data every field falls back to the scene's current image.
/// Stored data that can no longer be read counts as no prior data, so the
/// next submit overwrites it.
pub struct OpenSceneryEditor {
    scenery: Arc<SceneryRepository>,
}

impl OpenSceneryEditor {
    pub fn new(scenery: Arc<SceneryRepository>) -> Self {
        Self { scenery }
    }

    pub async fn execute(&self, scene_id: SceneId) -> Result<VariationStore, SceneryError> {
        let prior = match self.scenery.load(scene_id).await {
            Ok(prior) => prior,
            Err(RepoError::Serialization(message)) => {
                tracing::warn!(
                    scene_id = %scene_id,
                    error = %message,
                    "Stored scenery is unreadable, starting from the scene image"
                );
                None
            }
            Err(e) => return Err(e.into()),
        };
        let scene_image = self
            .scenery
            .scene_image(scene_id)
            .await?
            .and_then(|image| ImageRef::new(image).ok());

        let default_image = match (scene_image, prior.as_ref()) {
            (Some(image), _) => image,
            (None, Some(prior)) => prior.background().clone(),
            (None, None) => return Err(SceneryError::NoSceneImage),
        };

        let mut store = VariationStore::new();
        let update = store.hydrate(prior.as_ref(), &default_image);
        tracing::debug!(scene_id = %scene_id, ?update, "Scenery editor opened");

        Ok(store)
    }
}
