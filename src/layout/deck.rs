//! The organized deck.
//!
//! `DeckLayout` holds two protector slots, a bio slot, and four ordered list
//! sections. List sections are stored compacted: the visible list is always
//! the occupied positions in array order with gaps removed.
//!
//! Lists use `im::Vector`, so cloning a layout is O(1). The reorder engine
//! relies on this to return whole new layouts instead of mutating in place.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::section::{ListSection, Position, Section, SlotSection};
use super::slots::{Slot, SlotArray};
use crate::cards::{CardId, CardKind, CardReference};
use crate::core::error::DeckError;

/// Organized deck state.
///
/// ## Example
///
/// ```
/// use deck_organizer::cards::{CardId, CardKind, CardReference};
/// use deck_organizer::layout::{DeckLayout, ListSection, Position, SlotSection};
///
/// let mut deck = DeckLayout::new();
/// let at = deck.place(CardReference::new(CardId::new(1), "Tsuki", CardKind::Adendei)).unwrap();
/// assert_eq!(at, Position::List(ListSection::MainAdendei, 0));
///
/// let at = deck.place(CardReference::new(CardId::new(2), "Aegis", CardKind::Protector)).unwrap();
/// assert_eq!(at, Position::Slot(SlotSection::Protector1));
///
/// assert_eq!(deck.total_cards(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLayout {
    protector1: Option<CardReference>,
    protector2: Option<CardReference>,
    bio: Option<CardReference>,
    main_adendei: Vector<CardReference>,
    rot: Vector<CardReference>,
    ixim: Vector<CardReference>,
    other: Vector<CardReference>,
}

impl DeckLayout {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a single-card slot (builder pattern).
    ///
    /// Fails if the card is already elsewhere in the layout.
    pub fn with_slot(mut self, slot: SlotSection, card: CardReference) -> Result<Self, DeckError> {
        *self.slot_mut(slot) = Some(card);
        self.validate()?;
        Ok(self)
    }

    /// Replace a list section's contents (builder pattern).
    ///
    /// Fails if the cards overfill the section or repeat an identity.
    pub fn with_list<I>(mut self, list: ListSection, cards: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = CardReference>,
    {
        *self.list_mut(list) = cards.into_iter().collect();
        self.validate()?;
        Ok(self)
    }

    // === Read access ===

    /// Card in a single-card slot.
    #[must_use]
    pub fn slot(&self, slot: SlotSection) -> Option<&CardReference> {
        match slot {
            SlotSection::Protector1 => self.protector1.as_ref(),
            SlotSection::Protector2 => self.protector2.as_ref(),
            SlotSection::Bio => self.bio.as_ref(),
        }
    }

    /// Compacted contents of a list section.
    #[must_use]
    pub fn list(&self, list: ListSection) -> &Vector<CardReference> {
        match list {
            ListSection::MainAdendei => &self.main_adendei,
            ListSection::Rot => &self.rot,
            ListSection::Ixim => &self.ixim,
            ListSection::Other => &self.other,
        }
    }

    /// Padded working copy of a list section.
    #[must_use]
    pub fn padded(&self, list: ListSection) -> SlotArray {
        SlotArray::padded(self.list(list), list.capacity())
    }

    /// Card at a position, or `None` if the position is empty.
    ///
    /// Panics if a list index is beyond the section's capacity. Positions
    /// decoded through `Position::from_str` are always in range.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&CardReference> {
        match position {
            Position::Slot(slot) => self.slot(slot),
            Position::List(list, index) => {
                if let Some(capacity) = list.capacity() {
                    assert!(
                        index < capacity,
                        "index {} out of range for `{}` (capacity {})",
                        index,
                        list.name(),
                        capacity
                    );
                }
                self.list(list).get(index)
            }
        }
    }

    /// Number of cards in a section.
    #[must_use]
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Slot(slot) => usize::from(self.slot(slot).is_some()),
            Section::List(list) => self.list(list).len(),
        }
    }

    /// Total number of cards across all sections.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_cards() == 0
    }

    /// All cards: slots first, then lists in section order.
    pub fn cards(&self) -> impl Iterator<Item = &CardReference> + '_ {
        SlotSection::ALL
            .into_iter()
            .filter_map(move |slot| self.slot(slot))
            .chain(ListSection::ALL.into_iter().flat_map(move |list| self.list(list).iter()))
    }

    /// Find where a card currently sits.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<Position> {
        for slot in SlotSection::ALL {
            if self.slot(slot).is_some_and(|c| c.id == id) {
                return Some(Position::Slot(slot));
            }
        }
        for list in ListSection::ALL {
            if let Some(index) = self.list(list).iter().position(|c| c.id == id) {
                return Some(Position::List(list, index));
            }
        }
        None
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position_of(id).is_some()
    }

    // === Mutation ===

    /// Assign or clear a position, returning what was there.
    ///
    /// List sections are padded, assigned, and compacted again, so a card set
    /// past the current end lands at the end and clearing a position shifts
    /// later cards down. Does not check identity uniqueness.
    ///
    /// Panics if a list index is beyond the section's capacity.
    pub fn set(&mut self, position: Position, slot: Slot) -> Slot {
        match position {
            Position::Slot(section) => {
                let previous = std::mem::replace(self.slot_mut(section), slot.card().cloned());
                previous.into()
            }
            Position::List(list, index) => {
                let mut array = self.padded(list);
                let previous = array.set(index, slot);
                *self.list_mut(list) = array.compact();
                previous
            }
        }
    }

    /// Store a padded working copy back into its section, compacted.
    pub fn store(&mut self, list: ListSection, array: &SlotArray) {
        *self.list_mut(list) = array.compact();
    }

    /// Swap the contents of the two protector slots.
    pub fn swap_protectors(&mut self) {
        std::mem::swap(&mut self.protector1, &mut self.protector2);
    }

    /// Add a card to the section its kind routes to.
    ///
    /// Protectors take the first empty protector slot. List cards are
    /// appended. Fails if the card is already in the deck or the section is
    /// full.
    pub fn place(&mut self, card: CardReference) -> Result<Position, DeckError> {
        if self.contains(card.id) {
            return Err(DeckError::DuplicateCard(card.id));
        }

        let position = match card.kind {
            CardKind::Protector => {
                let free = [SlotSection::Protector1, SlotSection::Protector2]
                    .into_iter()
                    .find(|&slot| self.slot(slot).is_none())
                    .ok_or(DeckError::SectionFull(Section::Slot(SlotSection::Protector2)))?;
                Position::Slot(free)
            }
            CardKind::Bio => {
                if self.bio.is_some() {
                    return Err(DeckError::SectionFull(Section::Slot(SlotSection::Bio)));
                }
                Position::Slot(SlotSection::Bio)
            }
            kind => {
                let list = Self::list_for(kind);
                let len = self.list(list).len();
                if list.capacity().is_some_and(|capacity| len >= capacity) {
                    return Err(DeckError::SectionFull(Section::List(list)));
                }
                Position::List(list, len)
            }
        };

        match position {
            Position::Slot(slot) => *self.slot_mut(slot) = Some(card),
            Position::List(list, _) => self.list_mut(list).push_back(card),
        }
        Ok(position)
    }

    /// Remove a card from whichever section holds it.
    ///
    /// Returns the card and where it was, or `None` if it is not in the deck.
    pub fn remove(&mut self, id: CardId) -> Option<(Position, CardReference)> {
        let position = self.position_of(id)?;
        let removed = match position {
            Position::Slot(slot) => self.slot_mut(slot).take(),
            Position::List(list, index) => Some(self.list_mut(list).remove(index)),
        };
        removed.map(|card| (position, card))
    }

    /// Check capacity and identity uniqueness across the whole layout.
    pub fn validate(&self) -> Result<(), DeckError> {
        for list in ListSection::ALL {
            let len = self.list(list).len();
            if let Some(capacity) = list.capacity() {
                if len > capacity {
                    return Err(DeckError::CapacityExceeded {
                        section: Section::List(list),
                        len,
                        capacity,
                    });
                }
            }
        }

        let mut seen = FxHashSet::default();
        for card in self.cards() {
            if !seen.insert(card.id) {
                return Err(DeckError::DuplicateCard(card.id));
            }
        }
        Ok(())
    }

    fn list_for(kind: CardKind) -> ListSection {
        match kind {
            CardKind::Adendei => ListSection::MainAdendei,
            CardKind::Rot => ListSection::Rot,
            CardKind::Ixim => ListSection::Ixim,
            CardKind::Protector | CardKind::Bio | CardKind::Other => ListSection::Other,
        }
    }

    fn slot_mut(&mut self, slot: SlotSection) -> &mut Option<CardReference> {
        match slot {
            SlotSection::Protector1 => &mut self.protector1,
            SlotSection::Protector2 => &mut self.protector2,
            SlotSection::Bio => &mut self.bio,
        }
    }

    fn list_mut(&mut self, list: ListSection) -> &mut Vector<CardReference> {
        match list {
            ListSection::MainAdendei => &mut self.main_adendei,
            ListSection::Rot => &mut self.rot,
            ListSection::Ixim => &mut self.ixim,
            ListSection::Other => &mut self.other,
        }
    }
}
