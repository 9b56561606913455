//! Deck editing session.
//!
//! A `DeckSession` owns the layout and custom order for one editing session,
//! seeded from persisted data and handed to a `DeckPersistence` on save.
//! State is replaced wholesale after each drop, so the host can diff the old
//! and new layouts cheaply (`im` structural sharing) and render the new one
//! before the save completes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::{CardId, CardReference};
use crate::core::config::GestureConfig;
use crate::core::error::{DeckError, DragIdError};
use crate::gesture::{DragState, DropZoneResolver, GestureController, GestureEvent, InputEvent};
use crate::layout::{CustomOrder, DeckLayout, DropTarget, Position};
use crate::reorder::{ReorderOutcome, Reordered};

/// Persisted form of a deck session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub layout: DeckLayout,
    pub order: CustomOrder,
}

impl DeckSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DeckError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. The result is not validated; see
    /// `DeckSession::from_snapshot`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DeckError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Durable storage for deck snapshots.
///
/// Implementations may debounce; the session does not wait on anything but
/// the returned `Result`.
pub trait DeckPersistence {
    fn save(&mut self, snapshot: &DeckSnapshot) -> Result<(), DeckError>;
}

/// Result of feeding an input event to a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionEvent {
    pub gesture: GestureEvent,
    /// Set when the event ended a drag.
    pub outcome: Option<ReorderOutcome>,
}

/// One deck-editing session.
///
/// ## Example
///
/// ```
/// use deck_organizer::cards::{CardId, CardKind, CardReference};
/// use deck_organizer::layout::ListSection;
/// use deck_organizer::session::DeckSession;
///
/// let mut session = DeckSession::default();
/// for i in 0..3 {
///     session
///         .add_card(CardReference::new(CardId::new(i), format!("A{}", i), CardKind::Adendei))
///         .unwrap();
/// }
///
/// let outcome = session.drop_ids("mainAdendei-0", Some("trash-dropzone")).unwrap();
/// assert!(!session.layout().contains(CardId::new(0)));
/// assert_eq!(session.layout().list(ListSection::MainAdendei).len(), 2);
/// # let _ = outcome;
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckSession {
    layout: DeckLayout,
    order: CustomOrder,
    gestures: GestureController,
    dirty: bool,
}

impl DeckSession {
    /// Start an empty session.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            gestures: GestureController::new(config),
            ..Self::default()
        }
    }

    /// Start a session from persisted state.
    ///
    /// Rejects snapshots that overfill a section or repeat a card.
    pub fn from_snapshot(snapshot: DeckSnapshot, config: GestureConfig) -> Result<Self, DeckError> {
        snapshot.layout.validate()?;
        Ok(Self {
            layout: snapshot.layout,
            order: snapshot.order,
            gestures: GestureController::new(config),
            dirty: false,
        })
    }

    #[must_use]
    pub fn layout(&self) -> &DeckLayout {
        &self.layout
    }

    #[must_use]
    pub fn order(&self) -> &CustomOrder {
        &self.order
    }

    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        self.gestures.drag_state()
    }

    /// Whether there are changes since the last save.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Add a catalog card to the section its kind routes to.
    pub fn add_card(&mut self, card: CardReference) -> Result<Position, DeckError> {
        let id = card.id;
        let position = self.layout.place(card)?;
        self.order.append(position, id);
        self.dirty = true;
        debug!(%id, %position, "card added");
        Ok(position)
    }

    /// Remove a card from the layout and every custom-order sequence.
    ///
    /// Returns `false` if the card was not in the deck.
    pub fn remove_card(&mut self, id: CardId) -> bool {
        let removed = self.layout.remove(id).is_some();
        let unordered = self.order.remove(id);
        if removed || unordered {
            self.dirty = true;
            debug!(%id, "card removed");
        }
        removed
    }

    /// Mark a drag as started (for hosts that run their own gesture
    /// recognition).
    pub fn drag_start(&mut self, source: Position) {
        self.gestures.on_drag_start(source);
    }

    /// End a drag and apply the resulting state.
    ///
    /// A trash drop removes the card after the reorder result is applied.
    pub fn drag_end(&mut self, source: Position, target: Option<DropTarget>) -> ReorderOutcome {
        let mut removals: SmallVec<[CardId; 1]> = SmallVec::new();
        let mut collect = |id: CardId| removals.push(id);
        let Reordered { layout, order, outcome } =
            self.gestures
                .on_drag_end(source, target, &self.layout, &self.order, &mut collect);

        self.layout = layout;
        self.order = order;
        if outcome.changed() {
            self.dirty = true;
        }
        for id in removals {
            self.remove_card(id);
        }
        outcome
    }

    /// `drag_end` with host drag identifiers, e.g. `"rot-2"` onto `"trash-dropzone"`.
    ///
    /// An undecodable identifier still ends the drag, as a cancelled one,
    /// before the error is returned.
    pub fn drop_ids(&mut self, source: &str, target: Option<&str>) -> Result<ReorderOutcome, DragIdError> {
        let decoded = source.parse::<Position>().and_then(|source| {
            let target = target.map(str::parse::<DropTarget>).transpose()?;
            Ok((source, target))
        });

        match decoded {
            Ok((source, target)) => Ok(self.drag_end(source, target)),
            Err(err) => {
                if let Some(active) = self.gestures.drag_state().active() {
                    self.drag_end(active, None);
                }
                Err(err)
            }
        }
    }

    /// Feed an input event; ends and applies the drag when it completes.
    pub fn handle_input<Z>(&mut self, event: InputEvent, zones: &Z) -> SessionEvent
    where
        Z: DropZoneResolver + ?Sized,
    {
        let gesture = self.gestures.handle(event, zones);
        let outcome = match gesture {
            GestureEvent::Dropped { source, target } => Some(self.drag_end(source, target)),
            GestureEvent::Cancelled { source } => Some(self.drag_end(source, None)),
            _ => None,
        };
        SessionEvent { gesture, outcome }
    }

    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            layout: self.layout.clone(),
            order: self.order.clone(),
        }
    }

    /// Hand the current state to `persistence`; clears the dirty flag on
    /// success.
    pub fn save<P>(&mut self, persistence: &mut P) -> Result<(), DeckError>
    where
        P: DeckPersistence + ?Sized,
    {
        persistence.save(&self.snapshot())?;
        self.dirty = false;
        info!(cards = self.layout.total_cards(), "deck saved");
        Ok(())
    }
}
