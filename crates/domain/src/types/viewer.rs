//! Viewer-related domain types
//!
//! Types describing who is looking at a scene.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Role of a viewer of a scene.
///
/// Only two roles exist: the host's single "is privileged" flag maps
/// `true` to [`ViewerRole::Gm`] and `false` to [`ViewerRole::Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ViewerRole {
    /// Game master - sees the GM view, may edit variations
    Gm,
    /// Player - sees the player view
    #[default]
    Player,
}

impl ViewerRole {
    /// Map the host's privileged-viewer flag onto a role.
    pub fn from_privileged(is_privileged: bool) -> Self {
        if is_privileged {
            ViewerRole::Gm
        } else {
            ViewerRole::Player
        }
    }

    /// Check if this role is privileged (GM)
    pub fn is_privileged(&self) -> bool {
        matches!(self, ViewerRole::Gm)
    }
}

impl std::fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerRole::Gm => write!(f, "GM"),
            ViewerRole::Player => write!(f, "Player"),
        }
    }
}

impl std::str::FromStr for ViewerRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gm" | "dm" => Ok(ViewerRole::Gm),
            "player" | "pl" => Ok(ViewerRole::Player),
            other => Err(DomainError::parse(format!("Unknown viewer role: {}", other))),
        }
    }
}
