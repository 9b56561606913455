//! Card records and the catalog that provides them.
//!
//! ## Key Types
//!
//! - `CardId`: Stable card identity
//! - `CardKind`: Sub-type tag that routes a card into a deck section
//! - `CardReference`: Catalog record (identity, display data, filter metadata)
//! - `CardCatalog`: Query interface over the card collection

pub mod catalog;
pub mod definition;

pub use catalog::{CardCatalog, CardFilter, InMemoryCatalog};
pub use definition::{CardId, CardKind, CardReference};
