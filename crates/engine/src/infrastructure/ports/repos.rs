//! Repository port traits for scene storage.

use async_trait::async_trait;
use scenery_domain::SceneId;

use super::error::RepoError;

// =============================================================================
// Scene Document
// =============================================================================

/// The scene's own base image (what the host shows when nothing overrides it).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SceneRepo: Send + Sync {
    async fn get_image(&self, scene_id: SceneId) -> Result<Option<String>, RepoError>;
    async fn set_image(&self, scene_id: SceneId, image: &str) -> Result<(), RepoError>;
}

// =============================================================================
// Scene Flags
// =============================================================================

/// Scoped key-value storage attached to a scene.
///
/// `set_flag` replaces the stored value in full; it never merges.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SceneFlagRepo: Send + Sync {
    async fn get_flag(
        &self,
        scene_id: SceneId,
        scope: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, RepoError>;

    async fn set_flag(
        &self,
        scene_id: SceneId,
        scope: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), RepoError>;
}
