//! Input events and activation rules.
//!
//! Three input paths can start a drag:
//!
//! | Path | Activates when | Otherwise |
//! |------|----------------|-----------|
//! | Pointer | travel from press point reaches `pointer_distance` | release is a click |
//! | Touch | held for `touch_delay_ms` within `touch_tolerance` | moving further first is a scroll |
//! | Keyboard | immediately on pick-up | - |
//!
//! Presses on elements marked exempt (e.g. a delete button layered over a
//! card) never arm a drag.

use serde::{Deserialize, Serialize};

use crate::core::config::GestureConfig;
use crate::layout::Position;

/// A point in host coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Move one keyboard step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction, step: f32) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - step),
            Direction::Down => Self::new(self.x, self.y + step),
            Direction::Left => Self::new(self.x - step, self.y),
            Direction::Right => Self::new(self.x + step, self.y),
        }
    }
}

/// Arrow key direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard drag commands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum KeyInput {
    /// Pick up the focused card (Space/Enter). `point` is the card's center.
    Pick { id: Position, point: Point },
    /// Move the picked card one step.
    Arrow(Direction),
    /// Drop at the current point (Space/Enter).
    Drop,
    /// Abort the drag (Escape).
    Cancel,
}

/// Raw input fed to the gesture controller.
///
/// Timestamps are milliseconds on any monotonic clock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown {
        id: Position,
        point: Point,
        /// The press landed on an element exempt from dragging.
        exempt: bool,
        at_ms: u64,
    },
    PointerMove {
        point: Point,
        at_ms: u64,
    },
    PointerUp {
        point: Point,
        at_ms: u64,
    },
    TouchStart {
        id: Position,
        point: Point,
        exempt: bool,
        at_ms: u64,
    },
    TouchMove {
        point: Point,
        at_ms: u64,
    },
    TouchEnd {
        point: Point,
        at_ms: u64,
    },
    /// Timer tick, so a touch hold can activate without movement.
    Tick {
        at_ms: u64,
    },
    Key(KeyInput),
}

/// Which input path owns the active drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    Pointer,
    Touch,
    Keyboard,
}

/// Result of checking a pending touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchCheck {
    /// Still holding.
    Wait,
    Activate,
    /// Moved beyond tolerance while armed: a scroll.
    Abandon,
}

/// Has the pointer travelled far enough to start a drag?
#[must_use]
pub fn pointer_activates(config: &GestureConfig, origin: Point, point: Point) -> bool {
    origin.distance(point) >= config.pointer_distance
}

/// Check a pending touch pressed at `origin` / `since_ms`.
///
/// Tolerance is checked before the delay: a touch that reports its first
/// move late but far from the origin is still a scroll.
#[must_use]
pub fn check_touch(
    config: &GestureConfig,
    origin: Point,
    since_ms: u64,
    point: Point,
    now_ms: u64,
) -> TouchCheck {
    if origin.distance(point) > config.touch_tolerance {
        TouchCheck::Abandon
    } else if now_ms.saturating_sub(since_ms) >= config.touch_delay_ms {
        TouchCheck::Activate
    } else {
        TouchCheck::Wait
    }
}
