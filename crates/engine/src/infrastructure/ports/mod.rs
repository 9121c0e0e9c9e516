//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Scene storage (image + flags; could swap SQLite -> host document store)
//! - Directory listing (could swap local disk -> S3 bucket listing)
//! - Drawing (whatever canvas the host renders with)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{SceneFlagRepo, SceneRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{CanvasPort, FileBrowserPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockSceneFlagRepo, MockSceneRepo};

#[cfg(test)]
pub use external::{MockCanvasPort, MockFileBrowserPort};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{BrowseError, RepoError};
