//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod canvas;
pub mod clock;
pub mod config;
pub mod file_browser;
pub mod ports;
pub mod scene_store;
