//! SQLite-backed scene storage (base image + scoped flags).

use async_trait::async_trait;
use scenery_domain::SceneId;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, RepoError, SceneFlagRepo, SceneRepo};

/// SQLite implementation of the scene document and its flags.
pub struct SqliteSceneStore {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteSceneStore {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("scene_store", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS scenes (
                scene_id TEXT PRIMARY KEY,
                img TEXT,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("scene_store", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS scene_flags (
                scene_id TEXT NOT NULL,
                scope TEXT NOT NULL,
                flag_key TEXT NOT NULL,
                value_json TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (scene_id, scope, flag_key)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("scene_store", e))?;

        tracing::debug!(db_path = %db_path, "Scene store ready");
        Ok(Self { pool, clock })
    }
}

#[async_trait]
impl SceneRepo for SqliteSceneStore {
    async fn get_image(&self, scene_id: SceneId) -> Result<Option<String>, RepoError> {
        let row = sqlx::query("SELECT img FROM scenes WHERE scene_id = ?")
            .bind(scene_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("scenes", e))?;

        Ok(row.and_then(|row| row.get::<Option<String>, _>("img")))
    }

    async fn set_image(&self, scene_id: SceneId, image: &str) -> Result<(), RepoError> {
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO scenes (scene_id, img, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(scene_id) DO UPDATE SET
                img = excluded.img,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(scene_id.to_string())
        .bind(image)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("scenes", e))?;

        Ok(())
    }
}

#[async_trait]
impl SceneFlagRepo for SqliteSceneStore {
    async fn get_flag(
        &self,
        scene_id: SceneId,
        scope: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, RepoError> {
        let row = sqlx::query(
            "SELECT value_json FROM scene_flags WHERE scene_id = ? AND scope = ? AND flag_key = ?",
        )
        .bind(scene_id.to_string())
        .bind(scope)
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("scene_flags", e))?;

        match row {
            Some(row) => {
                let json: String = row.get("value_json");
                let value = serde_json::from_str(&json).map_err(RepoError::serialization)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set_flag(
        &self,
        scene_id: SceneId,
        scope: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), RepoError> {
        let json = serde_json::to_string(value).map_err(RepoError::serialization)?;
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO scene_flags (scene_id, scope, flag_key, value_json, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(scene_id, scope, flag_key) DO UPDATE SET
                value_json = excluded.value_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(scene_id.to_string())
        .bind(scope)
        .bind(key)
        .bind(json)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("scene_flags", e))?;

        Ok(())
    }
}
