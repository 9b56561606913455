//! Gesture controller: input events in, drag lifecycle and reorders out.
//!
//! The controller tracks `DragState` for visual feedback (hide the dragged
//! card, highlight the hovered target) and runs the activation rules from
//! `sensor`. When a drag ends it resets `DragState` first and only then runs
//! the reorder, so the UI never stays stuck in a dragging state whatever the
//! outcome.

use tracing::{debug, trace};

use super::sensor::{check_touch, pointer_activates, InputEvent, InputKind, KeyInput, Point, TouchCheck};
use crate::core::config::GestureConfig;
use crate::layout::{CustomOrder, DeckLayout, DropTarget, Position};
use crate::reorder::{compute_reorder, CardRemoval, Reordered};

/// Maps a point to the drop target under it.
///
/// Collision detection belongs to the host, which knows element geometry.
pub trait DropZoneResolver {
    fn target_at(&self, point: Point) -> Option<DropTarget>;
}

impl<F> DropZoneResolver for F
where
    F: Fn(Point) -> Option<DropTarget>,
{
    fn target_at(&self, point: Point) -> Option<DropTarget> {
        self(point)
    }
}

/// Transient drag feedback state. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    active: Option<Position>,
    over: Option<DropTarget>,
}

impl DragState {
    /// The identifier being dragged.
    #[must_use]
    pub fn active(&self) -> Option<Position> {
        self.active
    }

    /// The drop target currently under the drag, for highlighting.
    #[must_use]
    pub fn over(&self) -> Option<DropTarget> {
        self.over
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }
}

/// What an input event did to the gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Nothing happened (no drag armed, exempt press, click, scroll).
    Ignored,
    /// A press is armed but has not reached its activation threshold.
    Pending,
    Started(Position),
    Moved {
        point: Point,
        over: Option<DropTarget>,
    },
    /// The drag ended. `target` is `None` when released outside any zone.
    Dropped {
        source: Position,
        target: Option<DropTarget>,
    },
    Cancelled {
        source: Position,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Sensor {
    #[default]
    Idle,
    PointerArmed {
        id: Position,
        origin: Point,
    },
    TouchArmed {
        id: Position,
        origin: Point,
        since_ms: u64,
    },
    Active {
        id: Position,
        kind: InputKind,
        point: Point,
    },
}

/// Drives drag gestures for one deck editor.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    config: GestureConfig,
    state: DragState,
    sensor: Sensor,
}

impl GestureController {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: DragState::default(),
            sensor: Sensor::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.state
    }

    /// Mark `id` as being dragged.
    pub fn on_drag_start(&mut self, id: Position) {
        trace!(%id, "drag started");
        self.state = DragState {
            active: Some(id),
            over: None,
        };
    }

    /// End a drag: reset `DragState`, then compute the reorder.
    pub fn on_drag_end<R>(
        &mut self,
        source: Position,
        target: Option<DropTarget>,
        layout: &DeckLayout,
        order: &CustomOrder,
        removal: &mut R,
    ) -> Reordered
    where
        R: CardRemoval + ?Sized,
    {
        self.state = DragState::default();
        self.sensor = Sensor::Idle;
        debug!(%source, ?target, "drag ended");
        compute_reorder(layout, order, source, target, removal)
    }

    /// Feed one input event.
    ///
    /// `Dropped` and `Cancelled` leave `DragState` set until `on_drag_end`
    /// is called with the reported source and target.
    pub fn handle<Z>(&mut self, event: InputEvent, zones: &Z) -> GestureEvent
    where
        Z: DropZoneResolver + ?Sized,
    {
        match event {
            InputEvent::PointerDown { id, point, exempt, .. } => {
                if exempt || self.sensor != Sensor::Idle {
                    return GestureEvent::Ignored;
                }
                self.sensor = Sensor::PointerArmed { id, origin: point };
                GestureEvent::Pending
            }
            InputEvent::PointerMove { point, .. } => match self.sensor {
                Sensor::PointerArmed { id, origin } => {
                    if pointer_activates(&self.config, origin, point) {
                        self.activate(id, InputKind::Pointer, point)
                    } else {
                        GestureEvent::Pending
                    }
                }
                Sensor::Active { kind: InputKind::Pointer, .. } => self.move_to(point, zones),
                _ => GestureEvent::Ignored,
            },
            InputEvent::PointerUp { point, .. } => match self.sensor {
                Sensor::PointerArmed { .. } => {
                    // Released under the threshold: a click.
                    self.sensor = Sensor::Idle;
                    GestureEvent::Ignored
                }
                Sensor::Active { id, kind: InputKind::Pointer, .. } => self.drop_at(id, point, zones),
                _ => GestureEvent::Ignored,
            },
            InputEvent::TouchStart { id, point, exempt, at_ms } => {
                if exempt || self.sensor != Sensor::Idle {
                    return GestureEvent::Ignored;
                }
                self.sensor = Sensor::TouchArmed {
                    id,
                    origin: point,
                    since_ms: at_ms,
                };
                GestureEvent::Pending
            }
            InputEvent::TouchMove { point, at_ms } => match self.sensor {
                Sensor::TouchArmed { id, origin, since_ms } => {
                    self.check_hold(id, origin, since_ms, point, at_ms)
                }
                Sensor::Active { kind: InputKind::Touch, .. } => self.move_to(point, zones),
                _ => GestureEvent::Ignored,
            },
            InputEvent::TouchEnd { point, .. } => match self.sensor {
                Sensor::TouchArmed { .. } => {
                    // Lifted before the hold completed: a tap.
                    self.sensor = Sensor::Idle;
                    GestureEvent::Ignored
                }
                Sensor::Active { id, kind: InputKind::Touch, .. } => self.drop_at(id, point, zones),
                _ => GestureEvent::Ignored,
            },
            InputEvent::Tick { at_ms } => match self.sensor {
                Sensor::TouchArmed { id, origin, since_ms } => {
                    self.check_hold(id, origin, since_ms, origin, at_ms)
                }
                _ => GestureEvent::Ignored,
            },
            InputEvent::Key(key) => self.handle_key(key, zones),
        }
    }

    fn handle_key<Z>(&mut self, key: KeyInput, zones: &Z) -> GestureEvent
    where
        Z: DropZoneResolver + ?Sized,
    {
        match (key, self.sensor) {
            (KeyInput::Pick { id, point }, Sensor::Idle) => self.activate(id, InputKind::Keyboard, point),
            (
                KeyInput::Arrow(direction),
                Sensor::Active {
                    kind: InputKind::Keyboard,
                    point,
                    ..
                },
            ) => self.move_to(point.step(direction, self.config.keyboard_step), zones),
            (
                KeyInput::Drop,
                Sensor::Active {
                    id,
                    kind: InputKind::Keyboard,
                    point,
                },
            ) => self.drop_at(id, point, zones),
            // Escape aborts any active drag, not just keyboard ones.
            (KeyInput::Cancel, Sensor::Active { id, .. }) => {
                self.sensor = Sensor::Idle;
                debug!(%id, "drag cancelled");
                GestureEvent::Cancelled { source: id }
            }
            (KeyInput::Cancel, Sensor::PointerArmed { .. } | Sensor::TouchArmed { .. }) => {
                self.sensor = Sensor::Idle;
                GestureEvent::Ignored
            }
            _ => GestureEvent::Ignored,
        }
    }

    fn check_hold(
        &mut self,
        id: Position,
        origin: Point,
        since_ms: u64,
        point: Point,
        now_ms: u64,
    ) -> GestureEvent {
        match check_touch(&self.config, origin, since_ms, point, now_ms) {
            TouchCheck::Wait => GestureEvent::Pending,
            TouchCheck::Activate => self.activate(id, InputKind::Touch, point),
            TouchCheck::Abandon => {
                trace!(%id, "touch moved before hold delay, treating as scroll");
                self.sensor = Sensor::Idle;
                GestureEvent::Ignored
            }
        }
    }

    fn activate(&mut self, id: Position, kind: InputKind, point: Point) -> GestureEvent {
        self.sensor = Sensor::Active { id, kind, point };
        self.on_drag_start(id);
        GestureEvent::Started(id)
    }

    fn move_to<Z>(&mut self, point: Point, zones: &Z) -> GestureEvent
    where
        Z: DropZoneResolver + ?Sized,
    {
        if let Sensor::Active { point: current, .. } = &mut self.sensor {
            *current = point;
        }
        let over = zones.target_at(point);
        self.state.over = over;
        GestureEvent::Moved { point, over }
    }

    fn drop_at<Z>(&mut self, id: Position, point: Point, zones: &Z) -> GestureEvent
    where
        Z: DropZoneResolver + ?Sized,
    {
        self.sensor = Sensor::Idle;
        GestureEvent::Dropped {
            source: id,
            target: zones.target_at(point),
        }
    }
}
