//! Application state and composition.

use std::sync::Arc;

use scenery_domain::ViewerRole;

use crate::infrastructure::{
    clock::SystemClock,
    config::SceneryConfig,
    file_browser::LocalFileBrowser,
    ports::{CanvasPort, ClockPort, FileBrowserPort, RepoError, SceneFlagRepo, SceneRepo},
    scene_store::SqliteSceneStore,
};
use crate::repositories::SceneryRepository;
use crate::use_cases::scenery::{OpenSceneryEditor, ScanVariations, SubmitScenery, ViewerSession};
use crate::use_cases::SceneryUseCases;

/// Main application state.
pub struct App {
    pub config: SceneryConfig,
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for repository modules.
pub struct Repositories {
    pub scenery: Arc<SceneryRepository>,
}

/// Container for all use cases.
pub struct UseCases {
    pub scenery: SceneryUseCases,
}

impl App {
    /// Create a new App from already constructed ports.
    pub fn new(
        config: SceneryConfig,
        flags: Arc<dyn SceneFlagRepo>,
        scenes: Arc<dyn SceneRepo>,
        browser: Arc<dyn FileBrowserPort>,
    ) -> Self {
        let scenery = Arc::new(SceneryRepository::new(flags, scenes));

        let use_cases = UseCases {
            scenery: SceneryUseCases::new(
                Arc::new(OpenSceneryEditor::new(scenery.clone())),
                Arc::new(ScanVariations::new(browser, config.file_source.clone())),
                Arc::new(SubmitScenery::new(scenery.clone())),
            ),
        };

        Self {
            config,
            repositories: Repositories { scenery },
            use_cases,
        }
    }

    /// Open the SQLite store and local file browser named by `config`.
    pub async fn connect(config: SceneryConfig) -> Result<Self, RepoError> {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let store = Arc::new(SqliteSceneStore::new(&config.db_path, clock).await?);
        let browser = Arc::new(LocalFileBrowser::new(
            config.file_source.clone(),
            config.data_root.clone(),
        ));

        tracing::info!(
            db_path = %config.db_path,
            data_root = %config.data_root.display(),
            "Scenery engine connected"
        );

        Ok(Self::new(config, store.clone(), store, browser))
    }

    /// Start a resolver session for one viewer drawing on `canvas`.
    pub fn viewer_session(&self, canvas: Arc<dyn CanvasPort>, role: ViewerRole) -> ViewerSession {
        ViewerSession::new(
            self.repositories.scenery.clone(),
            canvas,
            role,
            self.config.redraw_delay,
        )
    }
}
