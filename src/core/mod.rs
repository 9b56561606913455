//! Core organizer types: configuration and errors.
//!
//! Section capacities are fixed constants. Gesture recognition is tuned via
//! `GestureConfig`.

pub mod config;
pub mod error;

pub use config::{
    GestureConfig, ADENDEI_CAPACITY, BIO_SLOTS, IXIM_CAPACITY, PROTECTOR_SLOTS, ROT_CAPACITY,
};
pub use error::{DeckError, DragIdError};
