//! # deck-organizer
//!
//! Deck layout model and drag-and-drop reorder engine for a TCG deck builder.
//!
//! ## Design Principles
//!
//! 1. **Fixed Taxonomy**: Two protector slots, one bio slot, and four list
//!    sections (Adendei, Rot, Ixim, overflow). No plugin layer.
//!
//! 2. **Whole-State Replacement**: `compute_reorder` never mutates its inputs.
//!    It returns a new `DeckLayout` and `CustomOrder`; `im` persistent
//!    structures keep that O(1) to clone.
//!
//! 3. **Snap Back, Never Fail**: A drag the engine has no transition for is
//!    a no-op with a named reason, not an error.
//!
//! ## Modules
//!
//! - `core`: Section capacities, gesture configuration, errors
//! - `cards`: Card records and the catalog provider
//! - `layout`: Sections, positions, `DeckLayout`, `CustomOrder`
//! - `reorder`: The reorder engine
//! - `gesture`: Pointer/touch/keyboard activation and drag state
//! - `session`: Editing session, snapshots, persistence hand-off

pub mod core;
pub mod cards;
pub mod layout;
pub mod reorder;
pub mod gesture;
pub mod session;

// Re-export commonly used types
pub use crate::core::{DeckError, DragIdError, GestureConfig};

pub use crate::cards::{
    CardCatalog, CardFilter, CardId, CardKind, CardReference, InMemoryCatalog,
};

pub use crate::layout::{
    CustomOrder, DeckLayout, DropTarget, ListSection, Position, Section, Slot, SlotArray,
    SlotSection,
};

pub use crate::reorder::{compute_reorder, CardRemoval, NoOpReason, ReorderOutcome, Reordered};

pub use crate::gesture::{
    DragState, DropZoneResolver, GestureController, GestureEvent, InputEvent, KeyInput, Point,
};

pub use crate::session::{DeckPersistence, DeckSession, DeckSnapshot, SessionEvent};
