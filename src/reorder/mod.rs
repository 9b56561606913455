//! Reorder engine.
//!
//! A pure function from (layout, custom order, drag source, drop target) to
//! the next layout and custom order. See `engine` for the decision order.

pub mod engine;

pub use engine::{compute_reorder, CardRemoval, NoOpReason, ReorderOutcome, Reordered};
