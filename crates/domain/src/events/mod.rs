//! Aggregate mutation outcomes
//!
//! Mutations on aggregates return an enum describing what happened, so the
//! caller (the form adapter) can react without diffing state.

pub mod variation_events;

pub use variation_events::*;
