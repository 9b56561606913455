//! Organizer configuration.
//!
//! The deck taxonomy is fixed: section capacities are constants, not
//! something a caller configures. What *is* configurable is how input
//! gestures are recognized, via `GestureConfig`.

use serde::{Deserialize, Serialize};

/// Capacity of the main Adendei list.
pub const ADENDEI_CAPACITY: usize = 24;

/// Capacity of the Rot sub-type list.
pub const ROT_CAPACITY: usize = 4;

/// Capacity of the Ixim sub-type list.
pub const IXIM_CAPACITY: usize = 4;

/// Number of protector slots.
pub const PROTECTOR_SLOTS: usize = 2;

/// Number of bio slots.
pub const BIO_SLOTS: usize = 1;

/// Gesture recognition parameters.
///
/// Distances are in host coordinate units (CSS pixels in a browser host).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum pointer travel before a press becomes a drag (default: 8.0).
    /// Anything shorter is a click.
    pub pointer_distance: f32,

    /// Hold time in milliseconds before a touch becomes a drag (default: 250).
    pub touch_delay_ms: u64,

    /// Movement allowed during the touch hold (default: 5.0).
    /// Moving further first means the user is scrolling.
    pub touch_tolerance: f32,

    /// Distance the virtual pointer moves per arrow key (default: 25.0).
    pub keyboard_step: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pointer_distance: 8.0,
            touch_delay_ms: 250,
            touch_tolerance: 5.0,
            keyboard_step: 25.0,
        }
    }
}

impl GestureConfig {
    /// Set the pointer activation distance.
    #[must_use]
    pub fn with_pointer_distance(mut self, distance: f32) -> Self {
        self.pointer_distance = distance;
        self
    }

    /// Set the touch hold delay.
    #[must_use]
    pub fn with_touch_delay(mut self, ms: u64) -> Self {
        self.touch_delay_ms = ms;
        self
    }

    /// Set the touch movement tolerance.
    #[must_use]
    pub fn with_touch_tolerance(mut self, tolerance: f32) -> Self {
        self.touch_tolerance = tolerance;
        self
    }

    /// Set the keyboard step size.
    #[must_use]
    pub fn with_keyboard_step(mut self, step: f32) -> Self {
        self.keyboard_step = step;
        self
    }
}
