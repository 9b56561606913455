//! Drag-and-drop reorder computation.
//!
//! `compute_reorder` takes the current layout and custom order plus a drag
//! source and drop target, and returns the next layout and custom order.
//! Inputs are never mutated. Every drag the engine has no transition for
//! resolves to an unchanged copy of the input state, so an invalid drop
//! snaps back instead of failing.
//!
//! ## Decision order
//!
//! 1. No target (drag cancelled): unchanged.
//! 2. Trash: signal removal of the card at the source, otherwise unchanged.
//! 3. Source equals target: unchanged.
//! 4. Same list section: swap two occupied positions (and their custom-order
//!    entries), or move a card into an empty position.
//! 5. Protector to the other protector: swap the slots (and their
//!    custom-order entries when both are occupied).
//! 6. Anything else: unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::CardId;
use crate::layout::{CustomOrder, DeckLayout, DropTarget, ListSection, Position, Slot, SlotSection};

/// Receives the identity of a card dropped on the trash zone.
///
/// The implementor removes the card from the deck and from any external
/// state. The engine does not wait for or check the result.
pub trait CardRemoval {
    fn remove_card(&mut self, id: CardId);
}

impl<F> CardRemoval for F
where
    F: FnMut(CardId),
{
    fn remove_card(&mut self, id: CardId) {
        self(id)
    }
}

/// Why a drag left the state unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoOpReason {
    /// Released outside any drop target.
    NoTarget,
    /// Dropped back where it started.
    SamePosition,
    /// Nothing at the source position.
    EmptySource,
    /// A list index beyond the section's capacity.
    OutOfRange,
    /// The engine defines no move between these sections.
    UnsupportedCrossSection,
    /// The section already holds more cards than it fits (a layout decoded
    /// from storage without `validate`).
    Overfull,
}

/// What a reorder did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReorderOutcome {
    Unchanged(NoOpReason),
    /// Removal was signalled for this card; the state was not touched.
    RemovalRequested(CardId),
    /// Two occupied positions in a list section were swapped.
    Swapped {
        section: ListSection,
        active: CardId,
        over: CardId,
    },
    /// A card moved into an empty position of its list section.
    Moved {
        section: ListSection,
        card: CardId,
        to: usize,
    },
    /// The two protector slots were exchanged.
    ProtectorsSwapped,
}

impl ReorderOutcome {
    /// Whether the returned layout or order may differ from the input.
    #[must_use]
    pub fn changed(&self) -> bool {
        matches!(
            self,
            Self::Swapped { .. } | Self::Moved { .. } | Self::ProtectorsSwapped
        )
    }
}

/// Result of `compute_reorder`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reordered {
    pub layout: DeckLayout,
    pub order: CustomOrder,
    pub outcome: ReorderOutcome,
}

impl Reordered {
    fn unchanged(layout: &DeckLayout, order: &CustomOrder, reason: NoOpReason) -> Self {
        debug!(?reason, "drag left the deck unchanged");
        Self {
            layout: layout.clone(),
            order: order.clone(),
            outcome: ReorderOutcome::Unchanged(reason),
        }
    }
}

/// Compute the deck state after dragging `source` onto `target`.
///
/// `target` is `None` when the drag was released outside any drop zone.
/// A trash drop calls `removal` exactly once with the dragged card's
/// identity and returns the input state; the removal collaborator owns that
/// mutation.
///
/// ## Example
///
/// ```
/// use deck_organizer::cards::{CardId, CardKind, CardReference};
/// use deck_organizer::layout::{CustomOrder, DeckLayout, ListSection, Position};
/// use deck_organizer::reorder::{compute_reorder, ReorderOutcome};
///
/// let a = CardReference::new(CardId::new(1), "A", CardKind::Adendei);
/// let b = CardReference::new(CardId::new(2), "B", CardKind::Adendei);
/// let layout = DeckLayout::new().with_list(ListSection::MainAdendei, [a, b]).unwrap();
/// let order = CustomOrder::from_layout(&layout);
///
/// let result = compute_reorder(
///     &layout,
///     &order,
///     Position::List(ListSection::MainAdendei, 0),
///     Some(Position::List(ListSection::MainAdendei, 1).into()),
///     &mut |_: CardId| {},
/// );
///
/// assert!(matches!(result.outcome, ReorderOutcome::Swapped { .. }));
/// assert_eq!(result.layout.list(ListSection::MainAdendei)[0].id, CardId::new(2));
/// ```
pub fn compute_reorder<R>(
    layout: &DeckLayout,
    order: &CustomOrder,
    source: Position,
    target: Option<DropTarget>,
    removal: &mut R,
) -> Reordered
where
    R: CardRemoval + ?Sized,
{
    let target = match target {
        None => return Reordered::unchanged(layout, order, NoOpReason::NoTarget),
        Some(DropTarget::Trash) => return trash(layout, order, source, removal),
        Some(DropTarget::Position(target)) => target,
    };

    if source == target {
        return Reordered::unchanged(layout, order, NoOpReason::SamePosition);
    }

    match (source, target) {
        (Position::List(from, i), Position::List(to, j)) if from == to => {
            reorder_list(layout, order, from, i, j)
        }
        (
            Position::Slot(SlotSection::Protector1),
            Position::Slot(SlotSection::Protector2),
        )
        | (
            Position::Slot(SlotSection::Protector2),
            Position::Slot(SlotSection::Protector1),
        ) => swap_protectors(layout, order),
        // Between list sections, between a list and a slot, and into or out
        // of the bio slot there is no transition.
        (Position::List(..), Position::List(..))
        | (Position::List(..), Position::Slot(_))
        | (Position::Slot(_), Position::List(..))
        | (Position::Slot(_), Position::Slot(_)) => {
            Reordered::unchanged(layout, order, NoOpReason::UnsupportedCrossSection)
        }
    }
}

fn trash<R>(layout: &DeckLayout, order: &CustomOrder, source: Position, removal: &mut R) -> Reordered
where
    R: CardRemoval + ?Sized,
{
    // Unchecked lookup: an out-of-range source is simply empty here.
    let card = match source {
        Position::Slot(slot) => layout.slot(slot),
        Position::List(list, index) => layout.list(list).get(index),
    };

    match card {
        Some(card) => {
            let id = card.id;
            debug!(%id, %source, "card dropped on trash");
            removal.remove_card(id);
            Reordered {
                layout: layout.clone(),
                order: order.clone(),
                outcome: ReorderOutcome::RemovalRequested(id),
            }
        }
        None => Reordered::unchanged(layout, order, NoOpReason::EmptySource),
    }
}

fn reorder_list(
    layout: &DeckLayout,
    order: &CustomOrder,
    section: ListSection,
    from: usize,
    to: usize,
) -> Reordered {
    if section.capacity().is_some_and(|capacity| layout.list(section).len() > capacity) {
        return Reordered::unchanged(layout, order, NoOpReason::Overfull);
    }

    let mut array = layout.padded(section);
    if !array.in_range(from) || !array.in_range(to) {
        return Reordered::unchanged(layout, order, NoOpReason::OutOfRange);
    }

    let active = array.get(from).map(|c| c.id);
    let over = array.get(to).map(|c| c.id);

    let mut next_order = order.clone();
    let outcome = match (active, over) {
        (Some(active), Some(over)) => {
            array.swap(from, to);
            next_order.swap_in_list(section, active, over);
            ReorderOutcome::Swapped {
                section,
                active,
                over,
            }
        }
        (Some(card), None) => {
            let moving = array.set(from, Slot::Empty);
            array.set(to, moving);
            ReorderOutcome::Moved { section, card, to }
        }
        (None, _) => return Reordered::unchanged(layout, order, NoOpReason::EmptySource),
    };

    let mut next_layout = layout.clone();
    next_layout.store(section, &array);
    debug!(?outcome, "reordered list section");

    Reordered {
        layout: next_layout,
        order: next_order,
        outcome,
    }
}

fn swap_protectors(layout: &DeckLayout, order: &CustomOrder) -> Reordered {
    let first = layout.slot(SlotSection::Protector1).map(|c| c.id);
    let second = layout.slot(SlotSection::Protector2).map(|c| c.id);
    if first.is_none() && second.is_none() {
        return Reordered::unchanged(layout, order, NoOpReason::EmptySource);
    }

    let mut next_layout = layout.clone();
    next_layout.swap_protectors();

    let mut next_order = order.clone();
    if let (Some(first), Some(second)) = (first, second) {
        // Identities missing from the sequence leave it untouched.
        next_order.swap_protectors(first, second);
    }
    debug!("swapped protector slots");

    Reordered {
        layout: next_layout,
        order: next_order,
        outcome: ReorderOutcome::ProtectorsSwapped,
    }
}
