//! Per-viewer resolution of the active background.
//!
//! A session belongs to one viewer with a fixed role. It applies the bound
//! image when the viewer's canvas initialises and re-applies it whenever a
//! scene update carries new scenery data.
//!
//! Only the viewer's own binding is read. A record whose other fields are
//! empty or missing still resolves for this role.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use scenery_domain::{resolve, ImageRef, SceneId, SceneryData, ViewerRole};
use tokio::task::JoinHandle;

use crate::infrastructure::ports::CanvasPort;
use crate::repositories::SceneryRepository;

/// JSON pointer of the scenery data inside a scene change payload.
const SCENERY_CHANGE_POINTER: &str = "/flags/scenery/data";

/// Wire keys of a role's binding, current name before the legacy one.
fn role_keys(role: ViewerRole) -> [&'static str; 2] {
    match role {
        ViewerRole::Gm => ["gmImage", "gm"],
        ViewerRole::Player => ["plImage", "pl"],
    }
}

/// The image bound to `role` in a stored or pushed scenery record.
///
/// A fully valid record goes through [`resolve`]; otherwise the role's own
/// key is read on its own.
fn role_image(raw: &serde_json::Value, role: ViewerRole) -> Option<ImageRef> {
    if let Ok(data) = serde_json::from_value::<SceneryData>(raw.clone()) {
        return resolve(Some(&data), role).cloned();
    }
    role_keys(role)
        .iter()
        .filter_map(|key| raw.get(*key)?.as_str())
        .find_map(|image| ImageRef::new(image).ok())
}

/// What the session last resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolverState {
    #[default]
    Uninitialized,
    /// `image` is `None` when the scene has no scenery data.
    Resolved { image: Option<ImageRef> },
}

/// Result of an init or update event.
#[derive(Debug)]
pub enum ApplyOutcome {
    /// Nothing relevant changed, or no image is bound to this role.
    Untouched,
    /// The scene has no scenery data; the host's own image stays.
    NotConfigured,
    /// `image` was applied. `follow_up` is the deferred re-apply, if one
    /// was scheduled.
    Applied {
        image: ImageRef,
        follow_up: Option<JoinHandle<()>>,
    },
}

pub struct ViewerSession {
    scenery: Arc<SceneryRepository>,
    canvas: Arc<dyn CanvasPort>,
    role: ViewerRole,
    redraw_delay: Duration,
    scene_id: Option<SceneId>,
    state: ResolverState,
    /// Bumped on every applied update; a follow-up only runs if it is
    /// still the latest.
    generation: Arc<AtomicU64>,
}

impl ViewerSession {
    pub fn new(
        scenery: Arc<SceneryRepository>,
        canvas: Arc<dyn CanvasPort>,
        role: ViewerRole,
        redraw_delay: Duration,
    ) -> Self {
        Self {
            scenery,
            canvas,
            role,
            redraw_delay,
            scene_id: None,
            state: ResolverState::Uninitialized,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn role(&self) -> ViewerRole {
        self.role
    }

    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    /// The viewer's canvas is being set up for `scene_id`.
    ///
    /// The host draws right after this, so no redraw is requested.
    pub async fn on_viewer_init(&mut self, scene_id: SceneId) -> ApplyOutcome {
        self.scene_id = Some(scene_id);

        let raw = match self.scenery.load_raw(scene_id).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.state = ResolverState::Resolved { image: None };
                return ApplyOutcome::NotConfigured;
            }
            Err(e) => {
                tracing::warn!(scene_id = %scene_id, error = %e, "Could not read scenery data");
                self.state = ResolverState::Resolved { image: None };
                return ApplyOutcome::Untouched;
            }
        };

        match role_image(&raw, self.role) {
            Some(image) => {
                self.canvas.apply_image(image.as_str());
                tracing::debug!(
                    scene_id = %scene_id,
                    role = %self.role,
                    image = %image,
                    "Applied scenery on init"
                );
                self.state = ResolverState::Resolved {
                    image: Some(image.clone()),
                };
                ApplyOutcome::Applied {
                    image,
                    follow_up: None,
                }
            }
            None => {
                tracing::warn!(
                    scene_id = %scene_id,
                    role = %self.role,
                    "Stored scenery has no image for this role"
                );
                self.state = ResolverState::Resolved { image: None };
                ApplyOutcome::Untouched
            }
        }
    }

    /// A scene was updated; `changes` is the update payload.
    ///
    /// Only payloads that carry `flags.scenery.data` for the viewer's
    /// current scene and bind an image to this role. The image is applied
    /// and redrawn at once, then applied and redrawn again after the
    /// configured delay unless a newer update has arrived by then.
    pub fn on_scene_updated(
        &mut self,
        scene_id: SceneId,
        changes: &serde_json::Value,
    ) -> ApplyOutcome {
        if self.scene_id != Some(scene_id) {
            return ApplyOutcome::Untouched;
        }
        let Some(raw) = changes.pointer(SCENERY_CHANGE_POINTER) else {
            return ApplyOutcome::Untouched;
        };

        let Some(image) = role_image(raw, self.role) else {
            tracing::warn!(
                scene_id = %scene_id,
                role = %self.role,
                "Scenery update has no image for this role"
            );
            return ApplyOutcome::Untouched;
        };

        self.canvas.apply_image(image.as_str());
        self.canvas.force_redraw();
        let follow_up = self.schedule_follow_up(&image);

        tracing::debug!(
            scene_id = %scene_id,
            role = %self.role,
            image = %image,
            "Applied scenery update"
        );
        self.state = ResolverState::Resolved {
            image: Some(image.clone()),
        };

        ApplyOutcome::Applied { image, follow_up }
    }

    fn schedule_follow_up(&self, image: &ImageRef) -> Option<JoinHandle<()>> {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No async runtime, skipping deferred redraw");
            return None;
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let canvas = Arc::clone(&self.canvas);
        let image = image.to_string();
        let delay = self.redraw_delay;
        Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(image = %image, "Superseded, skipping deferred redraw");
                return;
            }
            canvas.apply_image(&image);
            canvas.force_redraw();
        }))
    }
}
