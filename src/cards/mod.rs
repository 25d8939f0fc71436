//! Card system: identifiers and deck faces.
//!
//! ## Key Types
//!
//! - `CardId`: Validated 1..=52 identifier every reading works in
//! - `Suit`, `Rank`: Deck face of a card id
//!
//! Artwork and descriptive text are left to the caller.

pub mod card;

pub use card::{CardId, Rank, Suit, DECK_SIZE};
