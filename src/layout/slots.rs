//! Fixed-length slot arrays with explicit empty markers.
//!
//! A list section is stored compacted (occupied cards only, in order), but
//! reorder logic works on its padded form: an array sized to the section's
//! capacity where every index is either `Occupied` or `Empty`. `compact`
//! turns the padded form back into the stored list.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardReference;

/// One position in a padded section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Occupied(CardReference),
    #[default]
    Empty,
}

impl Slot {
    #[must_use]
    pub fn card(&self) -> Option<&CardReference> {
        match self {
            Slot::Occupied(card) => Some(card),
            Slot::Empty => None,
        }
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// Take the card out, leaving `Empty` behind.
    pub fn take(&mut self) -> Option<CardReference> {
        match std::mem::take(self) {
            Slot::Occupied(card) => Some(card),
            Slot::Empty => None,
        }
    }
}

impl From<Option<CardReference>> for Slot {
    fn from(card: Option<CardReference>) -> Self {
        card.map_or(Slot::Empty, Slot::Occupied)
    }
}

impl From<CardReference> for Slot {
    fn from(card: CardReference) -> Self {
        Slot::Occupied(card)
    }
}

/// Drop empty slots, keeping occupied cards in array order.
pub fn compact<'a, I>(slots: I) -> Vector<CardReference>
where
    I: IntoIterator<Item = &'a Slot>,
{
    slots.into_iter().filter_map(Slot::card).cloned().collect()
}

/// Padded working copy of a list section.
///
/// Bounded sections are padded to their capacity. The unbounded overflow
/// section starts at its current length and grows on demand.
///
/// Sub-type sections (capacity 4) stay inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotArray {
    slots: SmallVec<[Slot; 4]>,
    capacity: Option<usize>,
}

impl SlotArray {
    /// Lay out `cards` from index 0, padding to `capacity`.
    ///
    /// Panics if there are more cards than `capacity`.
    #[must_use]
    pub fn padded<'a, I>(cards: I, capacity: Option<usize>) -> Self
    where
        I: IntoIterator<Item = &'a CardReference>,
    {
        let mut slots: SmallVec<[Slot; 4]> = cards.into_iter().cloned().map(Slot::Occupied).collect();
        if let Some(capacity) = capacity {
            assert!(
                slots.len() <= capacity,
                "{} cards do not fit a section of capacity {}",
                slots.len(),
                capacity
            );
            slots.resize(capacity, Slot::Empty);
        }
        Self { slots, capacity }
    }

    /// Number of positions (capacity for bounded sections).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `index` addresses a position this section can hold.
    #[must_use]
    pub fn in_range(&self, index: usize) -> bool {
        self.capacity.map_or(true, |capacity| index < capacity)
    }

    /// Card at `index`. Positions past the end of the overflow array are empty.
    ///
    /// Panics if `index` is beyond a bounded section's capacity.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardReference> {
        self.check(index);
        self.slots.get(index).and_then(Slot::card)
    }

    /// Assign a position, returning what was there.
    ///
    /// In the overflow array any index at or past the end addresses the
    /// next free position, so the array grows by at most one slot.
    ///
    /// Panics if `index` is beyond a bounded section's capacity.
    pub fn set(&mut self, index: usize, slot: Slot) -> Slot {
        self.check(index);
        match self.slots.get_mut(index) {
            Some(current) => std::mem::replace(current, slot),
            None => {
                self.slots.push(slot);
                Slot::Empty
            }
        }
    }

    /// Swap two positions. A position past the end of the overflow array is
    /// empty, so swapping with it moves the card to the end.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check(a);
        self.check(b);
        let len = self.slots.len();
        match (a < len, b < len) {
            (true, true) => self.slots.swap(a, b),
            (true, false) => {
                let moving = std::mem::take(&mut self.slots[a]);
                self.slots.push(moving);
            }
            (false, true) => {
                let moving = std::mem::take(&mut self.slots[b]);
                self.slots.push(moving);
            }
            (false, false) => {}
        }
    }

    /// Occupied cards in array order.
    #[must_use]
    pub fn compact(&self) -> Vector<CardReference> {
        compact(self.slots.iter())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    fn check(&self, index: usize) {
        if let Some(capacity) = self.capacity {
            assert!(
                index < capacity,
                "index {} out of range for section of capacity {}",
                index,
                capacity
            );
        }
    }
}
