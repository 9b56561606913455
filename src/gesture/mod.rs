//! Gesture handling for deck drag-and-drop.
//!
//! ## Key Types
//!
//! - `InputEvent`: pointer, touch and keyboard input
//! - `GestureController`: activation rules, `DragState`, and the hand-off to
//!   the reorder engine
//! - `DropZoneResolver`: host-provided hit testing

pub mod controller;
pub mod sensor;

pub use controller::{DragState, DropZoneResolver, GestureController, GestureEvent};
pub use sensor::{
    check_touch, pointer_activates, Direction, InputEvent, InputKind, KeyInput, Point, TouchCheck,
};
