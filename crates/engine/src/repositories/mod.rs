//! Repository modules - Data access wrappers around port traits.
//!
//! Each repository wraps one or more port traits and provides the interface
//! for use cases to access persisted aggregates.

pub mod scenery;

pub use scenery::SceneryRepository;
