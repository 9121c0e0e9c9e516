//! Scenery engine library.
//!
//! ## Structure
//!
//! - `repositories/` - Data access wrappers around port traits
//! - `use_cases/` - User story orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod repositories;
pub mod use_cases;

pub use app::App;
