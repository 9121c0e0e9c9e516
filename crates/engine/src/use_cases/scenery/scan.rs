//! Scan use case - discovers variation files next to the default image.

use std::sync::Arc;

use scenery_domain::{match_variations, VariationStore, VariationStoreUpdate};

use super::ScanError;
use crate::infrastructure::ports::FileBrowserPort;

/// Lists the default image's directory and appends every sibling whose
/// name contains the default image's stem.
pub struct ScanVariations {
    browser: Arc<dyn FileBrowserPort>,
    source: String,
}

impl ScanVariations {
    pub fn new(browser: Arc<dyn FileBrowserPort>, source: impl Into<String>) -> Self {
        Self {
            browser,
            source: source.into(),
        }
    }

    /// Append discovered variations to `store`.
    ///
    /// The store is untouched if listing fails.
    pub async fn execute(
        &self,
        store: &mut VariationStore,
    ) -> Result<VariationStoreUpdate, ScanError> {
        let background = store.background().cloned().ok_or(ScanError::NoBackground)?;

        let listing = self.browser.list(&self.source, background.as_str()).await?;
        let found = match_variations(background.as_str(), listing.iter().map(String::as_str));

        tracing::info!(
            background = %background,
            listed = listing.len(),
            found = found.len(),
            "Scanned for variations"
        );

        Ok(store.append_variations(found))
    }
}
