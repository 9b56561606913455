//! Gesture controller integration tests.
//!
//! These tests feed pointer, touch and keyboard input through a
//! `DeckSession` with a simple grid hit-tester standing in for the host.

use deck_organizer::cards::{CardId, CardKind, CardReference};
use deck_organizer::gesture::{Direction, GestureEvent, InputEvent, KeyInput, Point};
use deck_organizer::layout::{DropTarget, ListSection, Position};
use deck_organizer::reorder::{NoOpReason, ReorderOutcome};
use deck_organizer::{DeckSession, GestureConfig};

/// Adendei cards sit in a 100px-wide row at y in 0..100; the trash zone is
/// at y >= 200.
fn grid(point: Point) -> Option<DropTarget> {
    if point.y >= 200.0 {
        return Some(DropTarget::Trash);
    }
    if point.x < 0.0 || point.y < 0.0 || point.y >= 100.0 {
        return None;
    }
    let index = (point.x / 100.0) as usize;
    (index < 24).then(|| DropTarget::Position(Position::List(ListSection::MainAdendei, index)))
}

fn session_with(n: u32) -> DeckSession {
    let mut session = DeckSession::new(GestureConfig::default());
    for i in 0..n {
        session
            .add_card(CardReference::new(CardId::new(i), format!("A{}", i), CardKind::Adendei))
            .unwrap();
    }
    session
}

fn ids(session: &DeckSession) -> Vec<u32> {
    session
        .layout()
        .list(ListSection::MainAdendei)
        .iter()
        .map(|c| c.id.raw())
        .collect()
}

fn slot(index: usize) -> Position {
    Position::List(ListSection::MainAdendei, index)
}

// =============================================================================
// Pointer
// =============================================================================

/// A pointer drag past the threshold swaps two cards.
#[test]
fn test_pointer_drag_swaps() {
    let mut session = session_with(3);

    let down = InputEvent::PointerDown { id: slot(0), point: Point::new(50.0, 50.0), exempt: false, at_ms: 0 };
    assert_eq!(session.handle_input(down, &grid).gesture, GestureEvent::Pending);

    let event = session.handle_input(InputEvent::PointerMove { point: Point::new(60.0, 50.0), at_ms: 16 }, &grid);
    assert_eq!(event.gesture, GestureEvent::Started(slot(0)));
    assert!(session.drag_state().is_dragging());
    assert_eq!(session.drag_state().active(), Some(slot(0)));

    let event = session.handle_input(InputEvent::PointerMove { point: Point::new(250.0, 50.0), at_ms: 32 }, &grid);
    assert_eq!(
        event.gesture,
        GestureEvent::Moved { point: Point::new(250.0, 50.0), over: Some(slot(2).into()) }
    );
    assert_eq!(session.drag_state().over(), Some(slot(2).into()));

    let event = session.handle_input(InputEvent::PointerUp { point: Point::new(250.0, 50.0), at_ms: 48 }, &grid);
    assert_eq!(event.gesture, GestureEvent::Dropped { source: slot(0), target: Some(slot(2).into()) });
    assert!(matches!(event.outcome, Some(ReorderOutcome::Swapped { .. })));

    assert_eq!(ids(&session), vec![2, 1, 0]);
    assert!(!session.drag_state().is_dragging());
}

/// Releasing outside every zone snaps back and clears the drag.
#[test]
fn test_pointer_release_outside() {
    let mut session = session_with(2);
    let before = session.snapshot();

    session.handle_input(InputEvent::PointerDown { id: slot(1), point: Point::new(150.0, 50.0), exempt: false, at_ms: 0 }, &grid);
    session.handle_input(InputEvent::PointerMove { point: Point::new(150.0, 150.0), at_ms: 10 }, &grid);
    let event = session.handle_input(InputEvent::PointerUp { point: Point::new(150.0, 150.0), at_ms: 20 }, &grid);

    assert_eq!(event.outcome, Some(ReorderOutcome::Unchanged(NoOpReason::NoTarget)));
    assert_eq!(session.snapshot(), before);
    assert!(!session.drag_state().is_dragging());
}

/// Pressing a delete button on top of a card never starts a drag.
#[test]
fn test_exempt_delete_button() {
    let mut session = session_with(2);

    let down = InputEvent::PointerDown { id: slot(0), point: Point::new(90.0, 10.0), exempt: true, at_ms: 0 };
    assert_eq!(session.handle_input(down, &grid).gesture, GestureEvent::Ignored);
    let moved = session.handle_input(InputEvent::PointerMove { point: Point::new(190.0, 10.0), at_ms: 10 }, &grid);
    assert_eq!(moved.gesture, GestureEvent::Ignored);
    assert!(!session.drag_state().is_dragging());
}

/// Dragging onto the trash zone removes the card through the session.
#[test]
fn test_pointer_drag_to_trash() {
    let mut session = session_with(3);

    session.handle_input(InputEvent::PointerDown { id: slot(1), point: Point::new(150.0, 50.0), exempt: false, at_ms: 0 }, &grid);
    session.handle_input(InputEvent::PointerMove { point: Point::new(150.0, 250.0), at_ms: 10 }, &grid);
    let event = session.handle_input(InputEvent::PointerUp { point: Point::new(150.0, 250.0), at_ms: 20 }, &grid);

    assert_eq!(event.outcome, Some(ReorderOutcome::RemovalRequested(CardId::new(1))));
    assert_eq!(ids(&session), vec![0, 2]);
    assert!(!session.layout().contains(CardId::new(1)));
    assert!(!session.order().list(ListSection::MainAdendei).contains(&CardId::new(1)));
}

// =============================================================================
// Touch
// =============================================================================

/// A touch held past the delay becomes a drag.
#[test]
fn test_touch_hold_then_drag() {
    let mut session = session_with(2);

    session.handle_input(InputEvent::TouchStart { id: slot(0), point: Point::new(50.0, 50.0), exempt: false, at_ms: 1_000 }, &grid);
    let early = session.handle_input(InputEvent::TouchMove { point: Point::new(52.0, 50.0), at_ms: 1_100 }, &grid);
    assert_eq!(early.gesture, GestureEvent::Pending);

    let started = session.handle_input(InputEvent::TouchMove { point: Point::new(53.0, 50.0), at_ms: 1_260 }, &grid);
    assert_eq!(started.gesture, GestureEvent::Started(slot(0)));

    session.handle_input(InputEvent::TouchMove { point: Point::new(150.0, 50.0), at_ms: 1_300 }, &grid);
    let event = session.handle_input(InputEvent::TouchEnd { point: Point::new(150.0, 50.0), at_ms: 1_320 }, &grid);
    assert!(matches!(event.outcome, Some(ReorderOutcome::Swapped { .. })));
    assert_eq!(ids(&session), vec![1, 0]);
}

/// Moving before the hold completes is a scroll.
#[test]
fn test_touch_scroll_abandons() {
    let mut session = session_with(2);

    session.handle_input(InputEvent::TouchStart { id: slot(0), point: Point::new(50.0, 50.0), exempt: false, at_ms: 0 }, &grid);
    let scroll = session.handle_input(InputEvent::TouchMove { point: Point::new(50.0, 90.0), at_ms: 50 }, &grid);
    assert_eq!(scroll.gesture, GestureEvent::Ignored);

    // Later movement does not resurrect the gesture
    let later = session.handle_input(InputEvent::TouchMove { point: Point::new(150.0, 50.0), at_ms: 400 }, &grid);
    assert_eq!(later.gesture, GestureEvent::Ignored);
    assert!(!session.drag_state().is_dragging());
}

/// A first move reported after the delay but far from the press is a scroll.
#[test]
fn test_touch_late_far_move_scrolls() {
    let mut session = session_with(2);

    session.handle_input(InputEvent::TouchStart { id: slot(0), point: Point::new(50.0, 50.0), exempt: false, at_ms: 0 }, &grid);
    let late = session.handle_input(InputEvent::TouchMove { point: Point::new(50.0, 90.0), at_ms: 400 }, &grid);

    assert_eq!(late.gesture, GestureEvent::Ignored);
    assert!(!session.drag_state().is_dragging());
}

// =============================================================================
// Keyboard
// =============================================================================

/// Keyboard drags move in discrete steps and drop on the zone under the point.
#[test]
fn test_keyboard_drag() {
    let config = GestureConfig::default().with_keyboard_step(100.0);
    let mut session = DeckSession::new(config);
    for i in 0..3 {
        session
            .add_card(CardReference::new(CardId::new(i), format!("A{}", i), CardKind::Adendei))
            .unwrap();
    }

    let pick = InputEvent::Key(KeyInput::Pick { id: slot(0), point: Point::new(50.0, 50.0) });
    assert_eq!(session.handle_input(pick, &grid).gesture, GestureEvent::Started(slot(0)));

    session.handle_input(InputEvent::Key(KeyInput::Arrow(Direction::Right)), &grid);
    let moved = session.handle_input(InputEvent::Key(KeyInput::Arrow(Direction::Right)), &grid);
    assert_eq!(moved.gesture, GestureEvent::Moved { point: Point::new(250.0, 50.0), over: Some(slot(2).into()) });

    let dropped = session.handle_input(InputEvent::Key(KeyInput::Drop), &grid);
    assert!(matches!(dropped.outcome, Some(ReorderOutcome::Swapped { .. })));
    assert_eq!(ids(&session), vec![2, 1, 0]);
}

/// Escape cancels the drag, resets drag state, and changes nothing.
#[test]
fn test_keyboard_cancel() {
    let mut session = session_with(2);
    let before = session.snapshot();

    session.handle_input(InputEvent::Key(KeyInput::Pick { id: slot(0), point: Point::new(50.0, 50.0) }), &grid);
    session.handle_input(InputEvent::Key(KeyInput::Arrow(Direction::Right)), &grid);
    let event = session.handle_input(InputEvent::Key(KeyInput::Cancel), &grid);

    assert_eq!(event.gesture, GestureEvent::Cancelled { source: slot(0) });
    assert_eq!(event.outcome, Some(ReorderOutcome::Unchanged(NoOpReason::NoTarget)));
    assert_eq!(session.snapshot(), before);
    assert!(!session.drag_state().is_dragging());
}
