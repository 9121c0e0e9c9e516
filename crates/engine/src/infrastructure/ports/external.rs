//! External service port traits (directory listing, drawing).

use async_trait::async_trait;

use super::error::BrowseError;

// =============================================================================
// Directory Listing
// =============================================================================

/// Lists the files stored next to a given path.
///
/// `source` names the storage backend (e.g. `"data"`); `path` is a file or
/// directory reference in that backend. Returned paths use the same form
/// as `path`. No retries happen at this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileBrowserPort: Send + Sync {
    async fn list(&self, source: &str, path: &str) -> Result<Vec<String>, BrowseError>;
}

// =============================================================================
// Drawing
// =============================================================================

/// The host's drawing surface. Calls are fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait CanvasPort: Send + Sync {
    /// Replace the scene background shown to this viewer.
    fn apply_image(&self, image: &str);
    /// Redraw now instead of waiting for the host's next render pass.
    fn force_redraw(&self);
}
