//! Card identifiers and their deck faces.
//!
//! A `CardId` is the stable 1..=52 index every derivation works in.
//! Suit and rank follow the deck order the readings were built on:
//! hearts 1..=13, clubs 14..=26, diamonds 27..=39, spades 40..=52.

use serde::{Deserialize, Serialize};

/// Number of cards in the deck.
pub const DECK_SIZE: u8 = 52;

/// Identifier of one of the 52 cards.
///
/// Always in `1..=52`. Construct with [`CardId::new`] to validate a raw value.
///
/// ## Example
///
/// ```
/// use destiny_cards::cards::{CardId, Rank, Suit};
///
/// let card = CardId::new(51).unwrap();
/// assert_eq!(card.suit(), Suit::Spades);
/// assert_eq!(card.rank(), Rank::Queen);
/// assert_eq!(card.name(), "Queen of Spades");
///
/// assert!(CardId::new(0).is_none());
/// assert!(CardId::new(53).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(u8);

impl CardId {
    /// Card returned when a derivation cannot produce anything better.
    pub const FALLBACK: CardId = CardId(1);

    /// Validate a raw identifier.
    #[must_use]
    pub fn new(raw: i64) -> Option<Self> {
        if (1..=i64::from(DECK_SIZE)).contains(&raw) {
            Some(Self(raw as u8))
        } else {
            None
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over the whole deck in id order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (1..=DECK_SIZE).map(CardId)
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        match (self.0 - 1) / 13 {
            0 => Suit::Hearts,
            1 => Suit::Clubs,
            2 => Suit::Diamonds,
            _ => Suit::Spades,
        }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[((self.0 - 1) % 13) as usize]
    }

    /// Full English name, e.g. "Ace of Hearts".
    #[must_use]
    pub fn name(self) -> String {
        format!("{} of {}", self.rank().name(), self.suit().name())
    }

    /// Two or three character label, e.g. "AH" or "10D".
    #[must_use]
    pub fn short_name(self) -> String {
        format!("{}{}", self.rank().symbol(), self.suit().symbol())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl TryFrom<u8> for CardId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        CardId::new(i64::from(raw)).ok_or_else(|| format!("card id {raw} outside 1..=52"))
    }
}

impl From<CardId> for u8 {
    fn from(card: CardId) -> u8 {
        card.0
    }
}

/// Card suit, in deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl Suit {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
        }
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in suit order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_bounds() {
        assert!(CardId::new(0).is_none());
        assert!(CardId::new(-3).is_none());
        assert!(CardId::new(53).is_none());
        assert_eq!(CardId::new(1).map(CardId::raw), Some(1));
        assert_eq!(CardId::new(52).map(CardId::raw), Some(52));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId::FALLBACK), "Card(1)");
    }

    #[test]
    fn test_suit_boundaries() {
        let suit = |raw| CardId::new(raw).unwrap().suit();
        assert_eq!(suit(1), Suit::Hearts);
        assert_eq!(suit(13), Suit::Hearts);
        assert_eq!(suit(14), Suit::Clubs);
        assert_eq!(suit(26), Suit::Clubs);
        assert_eq!(suit(27), Suit::Diamonds);
        assert_eq!(suit(39), Suit::Diamonds);
        assert_eq!(suit(40), Suit::Spades);
        assert_eq!(suit(52), Suit::Spades);
    }

    #[test]
    fn test_names() {
        assert_eq!(CardId::FALLBACK.name(), "Ace of Hearts");
        assert_eq!(CardId::new(36).unwrap().name(), "Ten of Diamonds");
        assert_eq!(CardId::new(36).unwrap().short_name(), "10D");
        assert_eq!(CardId::new(52).unwrap().short_name(), "KS");
    }

    #[test]
    fn test_all_covers_deck() {
        let all: Vec<_> = CardId::all().collect();
        assert_eq!(all.len(), 52);
        assert_eq!(all[0], CardId::FALLBACK);
        assert_eq!(all[51].raw(), 52);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let card = CardId::new(28).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "28");
        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);

        assert!(serde_json::from_str::<CardId>("0").is_err());
        assert!(serde_json::from_str::<CardId>("53").is_err());
    }
}
