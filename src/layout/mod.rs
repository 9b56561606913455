//! Deck layout model.
//!
//! The deck taxonomy is fixed: two protector slots, one bio slot, and four
//! list sections (Adendei, Rot, Ixim, and an unbounded overflow list).
//!
//! ## Key Types
//!
//! - `Section`, `SlotSection`, `ListSection`: the section taxonomy
//! - `Position`, `DropTarget`: typed drag source / drop target identifiers
//! - `Slot`, `SlotArray`: padded working form of a list section
//! - `DeckLayout`: the organized deck
//! - `CustomOrder`: user-defined ordering per section

pub mod deck;
pub mod order;
pub mod section;
pub mod slots;

pub use deck::DeckLayout;
pub use order::CustomOrder;
pub use section::{DropTarget, ListSection, Position, Section, SlotSection, TRASH_ID};
pub use slots::{compact, Slot, SlotArray};
