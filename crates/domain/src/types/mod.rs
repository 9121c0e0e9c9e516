//! # Scenery Domain Types
//!
//! Shared vocabulary types used by the domain aggregates and the engine's
//! ports. Pure data, no I/O.

mod viewer;
pub use viewer::ViewerRole;
