//! Deck sections and drag positions.
//!
//! The host identifies draggable elements with strings of the form
//! `"<section>-<index>"` (e.g. `"mainAdendei-3"`), single-card slots with just
//! the section name (`"protector1"`), and the removal zone with
//! `"trash-dropzone"`. These are decoded once into `Position` / `DropTarget`
//! and the rest of the crate works with the typed forms.
//!
//! ```
//! use deck_organizer::layout::{DropTarget, ListSection, Position, SlotSection};
//!
//! let source: Position = "mainAdendei-3".parse().unwrap();
//! assert_eq!(source, Position::List(ListSection::MainAdendei, 3));
//!
//! let target: DropTarget = "protector2".parse().unwrap();
//! assert_eq!(target, DropTarget::Position(Position::Slot(SlotSection::Protector2)));
//!
//! assert_eq!("trash-dropzone".parse::<DropTarget>().unwrap(), DropTarget::Trash);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::{ADENDEI_CAPACITY, IXIM_CAPACITY, ROT_CAPACITY};
use crate::core::error::DragIdError;

/// Identifier of the removal drop zone.
pub const TRASH_ID: &str = "trash-dropzone";

/// A single-card section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotSection {
    Protector1,
    Protector2,
    Bio,
}

impl SlotSection {
    pub const ALL: [SlotSection; 3] = [Self::Protector1, Self::Protector2, Self::Bio];

    /// Name used in drag identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Protector1 => "protector1",
            Self::Protector2 => "protector2",
            Self::Bio => "bio",
        }
    }

    #[must_use]
    pub const fn is_protector(self) -> bool {
        matches!(self, Self::Protector1 | Self::Protector2)
    }
}

/// A capacity-bounded ordered section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListSection {
    MainAdendei,
    Rot,
    Ixim,
    Other,
}

impl ListSection {
    pub const ALL: [ListSection; 4] = [Self::MainAdendei, Self::Rot, Self::Ixim, Self::Other];

    /// Name used in drag identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MainAdendei => "mainAdendei",
            Self::Rot => "rot",
            Self::Ixim => "ixim",
            Self::Other => "other",
        }
    }

    /// Maximum number of cards, or `None` for the unbounded overflow list.
    #[must_use]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::MainAdendei => Some(ADENDEI_CAPACITY),
            Self::Rot => Some(ROT_CAPACITY),
            Self::Ixim => Some(IXIM_CAPACITY),
            Self::Other => None,
        }
    }
}

/// Any deck section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Slot(SlotSection),
    List(ListSection),
}

impl Section {
    /// Maximum number of cards, or `None` if unbounded.
    #[must_use]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::Slot(_) => Some(1),
            Self::List(list) => list.capacity(),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slot(slot) => slot.name(),
            Self::List(list) => list.name(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = DragIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let section = match s {
            "protector1" => Self::Slot(SlotSection::Protector1),
            "protector2" => Self::Slot(SlotSection::Protector2),
            "bio" => Self::Slot(SlotSection::Bio),
            "mainAdendei" => Self::List(ListSection::MainAdendei),
            "rot" => Self::List(ListSection::Rot),
            "ixim" => Self::List(ListSection::Ixim),
            "other" => Self::List(ListSection::Other),
            "" => return Err(DragIdError::Empty),
            other => return Err(DragIdError::UnknownSection(other.to_string())),
        };
        Ok(section)
    }
}

/// A card position in the deck: a slot, or an index into a list section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Slot(SlotSection),
    List(ListSection, usize),
}

impl Position {
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::Slot(slot) => Section::Slot(slot),
            Self::List(list, _) => Section::List(list),
        }
    }

    /// Index within a list section; `None` for slots.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Slot(_) => None,
            Self::List(_, index) => Some(index),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slot(slot) => f.write_str(slot.name()),
            Self::List(list, index) => write!(f, "{}-{}", list.name(), index),
        }
    }
}

impl FromStr for Position {
    type Err = DragIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, index) = match s.split_once('-') {
            Some((name, index)) => (name, Some(index)),
            None => (s, None),
        };

        match name.parse::<Section>()? {
            // Slots carry no index; any suffix is ignored.
            Section::Slot(slot) => Ok(Self::Slot(slot)),
            Section::List(list) => {
                let raw = index.ok_or(DragIdError::MissingIndex(Section::List(list)))?;
                let index: usize = raw
                    .parse()
                    .map_err(|_| DragIdError::InvalidIndex(raw.to_string()))?;
                if let Some(capacity) = list.capacity() {
                    if index >= capacity {
                        return Err(DragIdError::IndexOutOfRange {
                            section: Section::List(list),
                            index,
                            capacity,
                        });
                    }
                }
                Ok(Self::List(list, index))
            }
        }
    }
}

/// Where a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropTarget {
    Position(Position),
    /// The removal zone.
    Trash,
}

impl From<Position> for DropTarget {
    fn from(position: Position) -> Self {
        Self::Position(position)
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => position.fmt(f),
            Self::Trash => f.write_str(TRASH_ID),
        }
    }
}

impl FromStr for DropTarget {
    type Err = DragIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == TRASH_ID {
            return Ok(Self::Trash);
        }
        s.parse().map(Self::Position)
    }
}
