//! Reorder engine scenario tests.
//!
//! These tests drive `compute_reorder` through the public API the way a deck
//! editor does: drag identifiers decoded from host strings, whole state in,
//! whole state out.

use deck_organizer::cards::{CardId, CardKind, CardReference};
use deck_organizer::layout::{CustomOrder, DeckLayout, DropTarget, ListSection, Position, SlotSection};
use deck_organizer::reorder::{compute_reorder, NoOpReason, ReorderOutcome, Reordered};

fn card(n: u32, kind: CardKind) -> CardReference {
    CardReference::new(CardId::new(n), format!("Card {}", n), kind)
}

fn adendei(n: u32) -> CardReference {
    card(n, CardKind::Adendei)
}

fn ids(layout: &DeckLayout, list: ListSection) -> Vec<u32> {
    layout.list(list).iter().map(|c| c.id.raw()).collect()
}

fn order_ids(order: &CustomOrder, list: ListSection) -> Vec<u32> {
    order.list(list).iter().map(|id| id.raw()).collect()
}

/// Run a drag between host identifiers, ignoring removal signals.
fn drag(layout: &DeckLayout, order: &CustomOrder, source: &str, target: &str) -> Reordered {
    let source: Position = source.parse().expect("valid source");
    let target: DropTarget = target.parse().expect("valid target");
    compute_reorder(layout, order, source, Some(target), &mut |_: CardId| {})
}

// =============================================================================
// Same-section list reordering
// =============================================================================

/// Swapping two occupied positions swaps their custom-order entries too.
#[test]
fn test_swap_scenario() {
    let layout = DeckLayout::new().with_list(ListSection::MainAdendei, [adendei(1), adendei(2)]).unwrap();
    let order = CustomOrder::new().with_list(ListSection::MainAdendei, [CardId::new(1), CardId::new(2)]);

    let result = drag(&layout, &order, "mainAdendei-0", "mainAdendei-1");

    assert_eq!(ids(&result.layout, ListSection::MainAdendei), vec![2, 1]);
    assert_eq!(order_ids(&result.order, ListSection::MainAdendei), vec![2, 1]);
    assert_eq!(
        result.outcome,
        ReorderOutcome::Swapped {
            section: ListSection::MainAdendei,
            active: CardId::new(1),
            over: CardId::new(2),
        }
    );

    // Inputs are untouched
    assert_eq!(ids(&layout, ListSection::MainAdendei), vec![1, 2]);
    assert_eq!(order_ids(&order, ListSection::MainAdendei), vec![1, 2]);
}

/// Moving into an empty position compacts the list and leaves the order alone.
#[test]
fn test_move_into_empty_slot() {
    let layout = DeckLayout::new().with_list(ListSection::MainAdendei, [adendei(1), adendei(2)]).unwrap();
    let order = CustomOrder::from_layout(&layout);

    let result = drag(&layout, &order, "mainAdendei-0", "mainAdendei-2");

    assert_eq!(ids(&result.layout, ListSection::MainAdendei), vec![2, 1]);
    assert_eq!(order_ids(&result.order, ListSection::MainAdendei), vec![1, 2]);
    assert_eq!(
        result.outcome,
        ReorderOutcome::Moved {
            section: ListSection::MainAdendei,
            card: CardId::new(1),
            to: 2,
        }
    );
}

/// Swaps in the sub-type lists behave like the Adendei list.
#[test]
fn test_swap_in_subtype_lists() {
    let layout = DeckLayout::new()
        .with_list(ListSection::Rot, [card(1, CardKind::Rot), card(2, CardKind::Rot), card(3, CardKind::Rot)]).unwrap()
        .with_list(ListSection::Ixim, [card(4, CardKind::Ixim), card(5, CardKind::Ixim)]).unwrap();
    let order = CustomOrder::from_layout(&layout);

    let result = drag(&layout, &order, "rot-2", "rot-0");
    assert_eq!(ids(&result.layout, ListSection::Rot), vec![3, 2, 1]);
    assert_eq!(order_ids(&result.order, ListSection::Rot), vec![3, 2, 1]);
    // Other sections are unaffected
    assert_eq!(ids(&result.layout, ListSection::Ixim), vec![4, 5]);

    let result = drag(&layout, &order, "ixim-1", "ixim-0");
    assert_eq!(ids(&result.layout, ListSection::Ixim), vec![5, 4]);
    assert_eq!(order_ids(&result.order, ListSection::Ixim), vec![5, 4]);
}

/// A swap only touches the custom order when both identities are in it.
#[test]
fn test_swap_with_partial_custom_order() {
    let layout = DeckLayout::new().with_list(ListSection::Other, [card(1, CardKind::Other), card(2, CardKind::Other)]).unwrap();
    let order = CustomOrder::new().with_list(ListSection::Other, [CardId::new(2)]);

    let result = drag(&layout, &order, "other-0", "other-1");
    assert_eq!(ids(&result.layout, ListSection::Other), vec![2, 1]);
    assert_eq!(result.order, order);
}

/// Custom order is independent of array order; swaps locate entries by identity.
#[test]
fn test_swap_uses_identity_not_index() {
    let layout = DeckLayout::new().with_list(ListSection::MainAdendei, [adendei(1), adendei(2), adendei(3)]).unwrap();
    let order = CustomOrder::new().with_list(
        ListSection::MainAdendei,
        [CardId::new(3), CardId::new(1), CardId::new(2)],
    );

    let result = drag(&layout, &order, "mainAdendei-0", "mainAdendei-2");
    assert_eq!(ids(&result.layout, ListSection::MainAdendei), vec![3, 2, 1]);
    assert_eq!(order_ids(&result.order, ListSection::MainAdendei), vec![1, 3, 2]);
}

/// A full Adendei list can still be reordered.
#[test]
fn test_full_adendei_list() {
    let layout = DeckLayout::new().with_list(ListSection::MainAdendei, (0..24).map(adendei)).unwrap();
    let order = CustomOrder::from_layout(&layout);

    let result = drag(&layout, &order, "mainAdendei-23", "mainAdendei-0");
    let after = ids(&result.layout, ListSection::MainAdendei);
    assert_eq!(after.len(), 24);
    assert_eq!(after[0], 23);
    assert_eq!(after[23], 0);
}

/// A target far past the end of the overflow list appends the card.
#[test]
fn test_overflow_far_target_appends() {
    let layout = DeckLayout::new()
        .with_list(ListSection::Other, [card(1, CardKind::Other), card(2, CardKind::Other)])
        .unwrap();
    let order = CustomOrder::from_layout(&layout);

    for target in [format!("other-{}", usize::MAX), "other-1000000000000".to_string()] {
        let result = drag(&layout, &order, "other-0", &target);
        assert_eq!(ids(&result.layout, ListSection::Other), vec![2, 1], "{}", target);
        assert_eq!(result.order, order);
    }

    // Nothing lives past the end, so dragging from there is a no-op
    let result = drag(&layout, &order, "other-1000000000000", "other-0");
    assert_eq!(result.outcome, ReorderOutcome::Unchanged(NoOpReason::EmptySource));
}

/// A layout decoded from storage with an overfull section is left alone.
#[test]
fn test_overfull_layout_is_noop() {
    let full = DeckLayout::new().with_list(ListSection::MainAdendei, (0..24).map(adendei)).unwrap();
    let mut value = serde_json::to_value(&full).unwrap();
    let extra = serde_json::to_value(adendei(24)).unwrap();
    value["main_adendei"].as_array_mut().unwrap().push(extra);
    let layout: DeckLayout = serde_json::from_value(value).unwrap();
    assert!(layout.validate().is_err());
    let order = CustomOrder::from_layout(&layout);

    let result = drag(&layout, &order, "mainAdendei-0", "mainAdendei-1");
    assert_eq!(result.outcome, ReorderOutcome::Unchanged(NoOpReason::Overfull));
    assert_eq!(result.layout, layout);
    assert_eq!(result.order, order);
}

// =============================================================================
// Protector slots
// =============================================================================

/// Dragging one protector onto the other swaps slots and custom order.
#[test]
fn test_protector_cross_swap() {
    let layout = DeckLayout::new()
        .with_slot(SlotSection::Protector1, card(10, CardKind::Protector)).unwrap()
        .with_slot(SlotSection::Protector2, card(11, CardKind::Protector)).unwrap();
    let order = CustomOrder::new().with_protectors([CardId::new(10), CardId::new(11)]);

    let result = drag(&layout, &order, "protector1", "protector2");

    assert_eq!(result.outcome, ReorderOutcome::ProtectorsSwapped);
    assert_eq!(result.layout.slot(SlotSection::Protector1).unwrap().id, CardId::new(11));
    assert_eq!(result.layout.slot(SlotSection::Protector2).unwrap().id, CardId::new(10));
    let protectors: Vec<_> = result.order.protectors().iter().map(|id| id.raw()).collect();
    assert_eq!(protectors, vec![11, 10]);
}

/// The reverse direction swaps as well.
#[test]
fn test_protector_cross_swap_reverse() {
    let layout = DeckLayout::new()
        .with_slot(SlotSection::Protector1, card(10, CardKind::Protector)).unwrap()
        .with_slot(SlotSection::Protector2, card(11, CardKind::Protector)).unwrap();
    let order = CustomOrder::from_layout(&layout);

    let result = drag(&layout, &order, "protector2-0", "protector1-0");
    assert_eq!(result.layout.slot(SlotSection::Protector1).unwrap().id, CardId::new(11));
    assert_eq!(result.layout.slot(SlotSection::Protector2).unwrap().id, CardId::new(10));
}

// =============================================================================
// No-op cases
// =============================================================================

/// List sections never exchange cards.
#[test]
fn test_unsupported_cross_section() {
    let layout = DeckLayout::new()
        .with_list(ListSection::MainAdendei, [adendei(1)]).unwrap()
        .with_list(ListSection::Rot, [card(2, CardKind::Rot)]).unwrap();
    let order = CustomOrder::from_layout(&layout);

    for (source, target) in [
        ("mainAdendei-0", "rot-0"),
        ("rot-0", "ixim-0"),
        ("mainAdendei-0", "protector1"),
        ("protector1", "other-0"),
        ("bio", "protector2"),
    ] {
        let result = drag(&layout, &order, source, target);
        assert_eq!(
            result.outcome,
            ReorderOutcome::Unchanged(NoOpReason::UnsupportedCrossSection),
            "{} -> {}",
            source,
            target
        );
        assert_eq!(result.layout, layout);
        assert_eq!(result.order, order);
    }
}

/// Dropping a card where it started changes nothing.
#[test]
fn test_same_position() {
    let layout = DeckLayout::new()
        .with_list(ListSection::MainAdendei, [adendei(1), adendei(2)]).unwrap()
        .with_slot(SlotSection::Bio, card(3, CardKind::Bio)).unwrap();
    let order = CustomOrder::from_layout(&layout);

    for id in ["mainAdendei-1", "bio", "protector1"] {
        let result = drag(&layout, &order, id, id);
        assert_eq!(result.outcome, ReorderOutcome::Unchanged(NoOpReason::SamePosition));
        assert_eq!(result.layout, layout);
        assert_eq!(result.order, order);
    }
}

/// A drag released outside any target is a no-op.
#[test]
fn test_no_target() {
    let layout = DeckLayout::new().with_list(ListSection::MainAdendei, [adendei(1)]).unwrap();
    let order = CustomOrder::from_layout(&layout);

    let result = compute_reorder(
        &layout,
        &order,
        "mainAdendei-0".parse().unwrap(),
        None,
        &mut |_: CardId| panic!("no removal expected"),
    );
    assert_eq!(result.outcome, ReorderOutcome::Unchanged(NoOpReason::NoTarget));
    assert_eq!(result.layout, layout);
}

// =============================================================================
// Trash
// =============================================================================

/// A trash drop signals removal once and leaves the state to the collaborator.
#[test]
fn test_trash_scenario() {
    let layout = DeckLayout::new().with_list(ListSection::MainAdendei, [adendei(7), adendei(8), adendei(9)]).unwrap();
    let order = CustomOrder::new().with_list(
        ListSection::MainAdendei,
        [CardId::new(9), CardId::new(7), CardId::new(8)],
    );
    let mut removed = Vec::new();

    let result = compute_reorder(
        &layout,
        &order,
        "mainAdendei-2".parse().unwrap(),
        Some("trash-dropzone".parse().unwrap()),
        &mut |id: CardId| removed.push(id),
    );

    assert_eq!(removed, vec![CardId::new(9)]);
    assert_eq!(result.outcome, ReorderOutcome::RemovalRequested(CardId::new(9)));
    assert_eq!(result.layout, layout);
    assert_eq!(result.order, order);
}

/// Slots resolve their card for a trash drop without an index.
#[test]
fn test_trash_from_slots() {
    let layout = DeckLayout::new()
        .with_slot(SlotSection::Protector2, card(1, CardKind::Protector)).unwrap()
        .with_slot(SlotSection::Bio, card(2, CardKind::Bio)).unwrap();
    let order = CustomOrder::from_layout(&layout);
    let mut removed = Vec::new();

    for source in ["protector2", "bio", "protector1"] {
        compute_reorder(
            &layout,
            &order,
            source.parse().unwrap(),
            Some(DropTarget::Trash),
            &mut |id: CardId| removed.push(id),
        );
    }

    // protector1 is empty: no removal for it
    assert_eq!(removed, vec![CardId::new(1), CardId::new(2)]);
}
