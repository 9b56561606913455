//! Card references - the catalog records the organizer places into a deck.
//!
//! The organizer treats a card as opaque apart from its identity, display
//! data, and the `CardKind` tag that routes it into a deck section. Filter
//! metadata (energy, rarity, set) is carried for the catalog.

use serde::{Deserialize, Serialize};

/// Stable identity of a catalog card.
///
/// A deck never holds two cards with the same `CardId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card sub-type tag.
///
/// Decides which deck section a card lands in when added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Protector,
    Bio,
    Adendei,
    Rot,
    Ixim,
    /// Anything without a dedicated section (warriors, tokens, ...).
    Other,
}

/// A card record as returned by the catalog.
///
/// ## Example
///
/// ```
/// use deck_organizer::cards::{CardReference, CardId, CardKind};
///
/// let card = CardReference::new(CardId::new(7), "Tsuki", CardKind::Adendei)
///     .with_image("cards/tsuki.webp")
///     .with_energy("Pyro")
///     .with_rarity("Rare");
///
/// assert_eq!(card.kind, CardKind::Adendei);
/// assert_eq!(card.energy.as_deref(), Some("Pyro"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardReference {
    /// Stable identity.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Image locator (URL or storage path).
    pub image: String,

    /// Sub-type tag used for section routing.
    pub kind: CardKind,

    #[serde(default)]
    pub energy: Option<String>,

    #[serde(default)]
    pub rarity: Option<String>,

    /// Expansion set code.
    #[serde(default)]
    pub set: Option<String>,
}

impl CardReference {
    /// Create a card reference with no image or filter metadata.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            kind,
            energy: None,
            rarity: None,
            set: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_energy(mut self, energy: impl Into<String>) -> Self {
        self.energy = Some(energy.into());
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    #[must_use]
    pub fn with_set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(set.into());
        self
    }
}
