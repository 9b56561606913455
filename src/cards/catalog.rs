//! Card catalog provider.
//!
//! The deck editor browses cards through a `CardCatalog`. Production hosts
//! back it with their document store; `InMemoryCatalog` serves tests and
//! offline use.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardId, CardKind, CardReference};

/// Query criteria for the catalog.
///
/// All set criteria must match. `search` is a case-insensitive substring
/// match on the card name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFilter {
    pub kind: Option<CardKind>,
    pub energy: Option<String>,
    pub rarity: Option<String>,
    pub set: Option<String>,
    pub search: Option<String>,
}

impl CardFilter {
    /// A filter matching every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: CardKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn energy(mut self, energy: impl Into<String>) -> Self {
        self.energy = Some(energy.into());
        self
    }

    #[must_use]
    pub fn rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    #[must_use]
    pub fn set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(set.into());
        self
    }

    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Check whether a card satisfies this filter.
    #[must_use]
    pub fn matches(&self, card: &CardReference) -> bool {
        fn field_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
            match wanted {
                Some(w) => actual.as_deref() == Some(w.as_str()),
                None => true,
            }
        }

        if let Some(kind) = self.kind {
            if card.kind != kind {
                return false;
            }
        }

        if !field_matches(&self.energy, &card.energy)
            || !field_matches(&self.rarity, &card.rarity)
            || !field_matches(&self.set, &card.set)
        {
            return false;
        }

        match &self.search {
            Some(text) if !text.trim().is_empty() => card
                .name
                .to_lowercase()
                .contains(&text.trim().to_lowercase()),
            _ => true,
        }
    }
}

/// Source of card records for the deck editor.
pub trait CardCatalog {
    /// Return every card matching `filter`.
    fn query(&self, filter: &CardFilter) -> Vec<CardReference>;

    /// Look up a single card by identity.
    fn get(&self, id: CardId) -> Option<CardReference>;
}

/// Catalog held in memory.
///
/// ## Example
///
/// ```
/// use deck_organizer::cards::{CardCatalog, CardFilter, CardId, CardKind, CardReference, InMemoryCatalog};
///
/// let mut catalog = InMemoryCatalog::new();
/// catalog.insert(CardReference::new(CardId::new(1), "Tsuki", CardKind::Adendei));
/// catalog.insert(CardReference::new(CardId::new(2), "Aegis", CardKind::Protector));
///
/// let adendei = catalog.query(&CardFilter::new().kind(CardKind::Adendei));
/// assert_eq!(adendei.len(), 1);
/// assert_eq!(adendei[0].name, "Tsuki");
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    cards: FxHashMap<CardId, CardReference>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a card record.
    ///
    /// Returns the previous record with the same identity, if any.
    pub fn insert(&mut self, card: CardReference) -> Option<CardReference> {
        self.cards.insert(card.id, card)
    }

    /// Remove a card record.
    pub fn remove(&mut self, id: CardId) -> Option<CardReference> {
        self.cards.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<CardReference> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = CardReference>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for card in iter {
            catalog.insert(card);
        }
        catalog
    }
}

impl CardCatalog for InMemoryCatalog {
    fn query(&self, filter: &CardFilter) -> Vec<CardReference> {
        let mut found: Vec<CardReference> = self
            .cards
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        // Hash order is arbitrary; keep results stable for display.
        found.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        found
    }

    fn get(&self, id: CardId) -> Option<CardReference> {
        self.cards.get(&id).cloned()
    }
}
