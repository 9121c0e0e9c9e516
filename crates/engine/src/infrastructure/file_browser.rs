//! Local filesystem implementation of directory listing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::infrastructure::ports::{BrowseError, FileBrowserPort};

/// File extensions offered as scene backgrounds.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "bmp", "webp", "webm", "svg"];

/// Lists image files under a data root.
///
/// Paths are `/`-separated and relative to `root`. Listing `maps/room.png`
/// reads the `maps` directory and returns entries like `maps/room-night.png`,
/// sorted by name.
pub struct LocalFileBrowser {
    source: String,
    root: PathBuf,
}

impl LocalFileBrowser {
    pub fn new(source: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            root: root.into(),
        }
    }

    fn directory_of(path: &str) -> Result<&str, BrowseError> {
        let path = path.trim();
        if path.starts_with('/') || path.split('/').any(|segment| segment == "..") {
            return Err(BrowseError::InvalidPath(path.to_string()));
        }
        Ok(match path.rfind('/') {
            Some(idx) => &path[..idx],
            None => "",
        })
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[async_trait]
impl FileBrowserPort for LocalFileBrowser {
    async fn list(&self, source: &str, path: &str) -> Result<Vec<String>, BrowseError> {
        if source != self.source {
            return Err(BrowseError::UnknownSource(source.to_string()));
        }

        let dir = Self::directory_of(path)?;
        let full_dir = if dir.is_empty() {
            self.root.clone()
        } else {
            self.root.join(dir)
        };

        let mut entries = tokio::fs::read_dir(&full_dir)
            .await
            .map_err(|e| BrowseError::list_failed(dir, e))?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| BrowseError::list_failed(dir, e))?
        {
            let entry_path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file || !is_supported_image(&entry_path) {
                continue;
            }
            let Some(name) = entry_path.file_name().and_then(|n| n.to_str()) else {
                tracing::debug!(path = ?entry_path, "Skipping non UTF-8 file name");
                continue;
            };
            files.push(if dir.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", dir, name)
            });
        }

        files.sort();
        tracing::debug!(dir = %dir, count = files.len(), "Listed image files");
        Ok(files)
    }
}
