//! Error types for the boundaries around the reorder engine.
//!
//! The engine itself never fails: unsupported drags are no-ops. Errors only
//! arise when decoding drag identifiers from the host, when adding cards to
//! a deck, and when loading or saving deck state.

use thiserror::Error;

use crate::cards::CardId;
use crate::layout::Section;

/// Failure to decode a `"<section>-<index>"` drag identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DragIdError {
    #[error("Drag identifier is empty.")]
    Empty,
    #[error("Unknown deck section `{0}`.")]
    UnknownSection(String),
    #[error("Section `{0}` requires an index.")]
    MissingIndex(Section),
    #[error("Invalid index `{0}`.")]
    InvalidIndex(String),
    #[error("Index {index} is out of range for `{section}` (capacity {capacity}).")]
    IndexOutOfRange {
        section: Section,
        index: usize,
        capacity: usize,
    },
}

/// Failure to mutate, load or persist a deck.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Section `{0}` is full.")]
    SectionFull(Section),
    #[error("{0} is already in the deck.")]
    DuplicateCard(CardId),
    #[error("Section `{section}` holds {len} cards but only fits {capacity}.")]
    CapacityExceeded {
        section: Section,
        len: usize,
        capacity: usize,
    },
    #[error("Failed to encode or decode a deck snapshot.")]
    Codec(#[from] bincode::Error),
    /// Reported by a `DeckPersistence` implementation.
    #[error("Deck persistence failed: {0}")]
    Persistence(String),
}
