//! Scenery use cases.
//!
//! Editing (open, scan, submit) is GM-only; every viewer runs a
//! [`ViewerSession`] to keep its canvas on the image bound to its role.

use std::sync::Arc;

use scenery_domain::DomainError;

use crate::infrastructure::ports::{BrowseError, RepoError};

mod open_editor;
mod scan;
mod submit;
mod viewer_session;

pub use open_editor::OpenSceneryEditor;
pub use scan::ScanVariations;
pub use submit::SubmitScenery;
pub use viewer_session::{ApplyOutcome, ResolverState, ViewerSession};

/// Container for scenery use cases.
pub struct SceneryUseCases {
    pub open_editor: Arc<OpenSceneryEditor>,
    pub scan: Arc<ScanVariations>,
    pub submit: Arc<SubmitScenery>,
}

impl SceneryUseCases {
    pub fn new(
        open_editor: Arc<OpenSceneryEditor>,
        scan: Arc<ScanVariations>,
        submit: Arc<SubmitScenery>,
    ) -> Self {
        Self {
            open_editor,
            scan,
            submit,
        }
    }
}

/// Errors from opening or submitting the scenery editor.
#[derive(Debug, thiserror::Error)]
pub enum SceneryError {
    #[error("Only the GM can edit scenery")]
    Unauthorized,
    #[error("Scene has no image to start from")]
    NoSceneImage,
    #[error(transparent)]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Errors from scanning for variations.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Cannot scan: {0}")]
    Browse(#[from] BrowseError),
    #[error("Cannot scan without a default image")]
    NoBackground,
}
