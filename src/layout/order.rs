//! User-defined card ordering per section.
//!
//! `CustomOrder` is kept alongside `DeckLayout` and is independent of the
//! layout's array order. The reorder engine swaps two identities here only
//! when it swaps two occupied positions in the same section; moves into
//! empty positions and removals by drag leave it alone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::deck::DeckLayout;
use super::section::{ListSection, Position, SlotSection};
use crate::cards::{CardId, CardReference};

/// Swap two identities within a sequence.
///
/// Returns `false` (and leaves the sequence untouched) unless both are found.
fn swap_identities(sequence: &mut Vector<CardId>, a: CardId, b: CardId) -> bool {
    let first = sequence.iter().position(|&id| id == a);
    let second = sequence.iter().position(|&id| id == b);
    match (first, second) {
        (Some(i), Some(j)) => {
            sequence.swap(i, j);
            true
        }
        _ => false,
    }
}

/// Per-section custom ordering of card identities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomOrder {
    protectors: Vector<CardId>,
    main_adendei: Vector<CardId>,
    rot: Vector<CardId>,
    ixim: Vector<CardId>,
    other: Vector<CardId>,
}

impl CustomOrder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every sequence from the layout's current array order.
    #[must_use]
    pub fn from_layout(layout: &DeckLayout) -> Self {
        let mut order = Self::new();
        order.protectors = [SlotSection::Protector1, SlotSection::Protector2]
            .into_iter()
            .filter_map(|slot| layout.slot(slot).map(|c| c.id))
            .collect();
        for list in ListSection::ALL {
            *order.list_mut(list) = layout.list(list).iter().map(|c| c.id).collect();
        }
        order
    }

    /// Replace the protector sequence (builder pattern).
    #[must_use]
    pub fn with_protectors<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = CardId>,
    {
        self.protectors = ids.into_iter().collect();
        self
    }

    /// Replace a list section's sequence (builder pattern).
    #[must_use]
    pub fn with_list<I>(mut self, list: ListSection, ids: I) -> Self
    where
        I: IntoIterator<Item = CardId>,
    {
        *self.list_mut(list) = ids.into_iter().collect();
        self
    }

    #[must_use]
    pub fn protectors(&self) -> &Vector<CardId> {
        &self.protectors
    }

    #[must_use]
    pub fn list(&self, list: ListSection) -> &Vector<CardId> {
        match list {
            ListSection::MainAdendei => &self.main_adendei,
            ListSection::Rot => &self.rot,
            ListSection::Ixim => &self.ixim,
            ListSection::Other => &self.other,
        }
    }

    /// Swap two identities in a list section's sequence.
    pub fn swap_in_list(&mut self, list: ListSection, a: CardId, b: CardId) -> bool {
        swap_identities(self.list_mut(list), a, b)
    }

    /// Swap two identities in the protector sequence.
    pub fn swap_protectors(&mut self, a: CardId, b: CardId) -> bool {
        swap_identities(&mut self.protectors, a, b)
    }

    /// Append a newly placed card to the sequence for its position.
    ///
    /// The bio slot has no sequence.
    pub fn append(&mut self, position: Position, id: CardId) {
        let sequence = match position {
            Position::Slot(SlotSection::Bio) => return,
            Position::Slot(_) => &mut self.protectors,
            Position::List(list, _) => self.list_mut(list),
        };
        if !sequence.contains(&id) {
            sequence.push_back(id);
        }
    }

    /// Drop an identity from every sequence.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: CardId) -> bool {
        let mut removed = false;
        for sequence in [
            &mut self.protectors,
            &mut self.main_adendei,
            &mut self.rot,
            &mut self.ixim,
            &mut self.other,
        ] {
            let before = sequence.len();
            sequence.retain(|&other| other != id);
            removed |= sequence.len() != before;
        }
        removed
    }

    /// A list section's cards in custom order.
    ///
    /// Cards missing from the sequence follow in array order.
    #[must_use]
    pub fn sorted<'a>(&self, layout: &'a DeckLayout, list: ListSection) -> Vec<&'a CardReference> {
        let cards = layout.list(list);
        let mut sorted: Vec<&CardReference> = self
            .list(list)
            .iter()
            .filter_map(|&id| cards.iter().find(|c| c.id == id))
            .collect();
        for card in cards {
            if !sorted.iter().any(|c| c.id == card.id) {
                sorted.push(card);
            }
        }
        sorted
    }

    fn list_mut(&mut self, list: ListSection) -> &mut Vector<CardId> {
        match list {
            ListSection::MainAdendei => &mut self.main_adendei,
            ListSection::Rot => &mut self.rot,
            ListSection::Ixim => &mut self.ixim,
            ListSection::Other => &mut self.other,
        }
    }
}
