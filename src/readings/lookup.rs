//! Precomputed birth card table.
//!
//! The `BirthCardLookup` maps every calendar date (leap year included) to
//! its birth card, and every card back to the dates that produce it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::birth::birth_card;
use crate::cards::CardId;

/// Days per month over a leap calendar, so Feb 29 gets a card.
const DAYS_IN_MONTH: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A month/day pair, year-independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u8,
    pub day: u8,
}

impl MonthDay {
    #[must_use]
    pub const fn new(month: u8, day: u8) -> Self {
        Self { month, day }
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Dates sharing a birth card. Most cards have around seven.
pub type CardDates = SmallVec<[MonthDay; 8]>;

/// Two-way birth card table.
///
/// ## Example
///
/// ```
/// use destiny_cards::cards::CardId;
/// use destiny_cards::readings::{BirthCardLookup, MonthDay};
///
/// let lookup = BirthCardLookup::new();
/// assert_eq!(lookup.birth_card(6, 15), CardId::new(28).unwrap());
///
/// // Feb 30 is arithmetic-valid but not a calendar date
/// assert!(!lookup.is_valid_birth_date(2, 30));
///
/// assert!(lookup.dates_for(CardId::new(52).unwrap()).contains(&MonthDay::new(1, 1)));
/// ```
#[derive(Clone, Debug)]
pub struct BirthCardLookup {
    by_date: FxHashMap<MonthDay, CardId>,
    by_card: FxHashMap<CardId, CardDates>,
}

impl BirthCardLookup {
    /// Build the table for all 366 calendar dates.
    #[must_use]
    pub fn new() -> Self {
        let mut by_date = FxHashMap::default();
        let mut by_card: FxHashMap<CardId, CardDates> = FxHashMap::default();

        for (month, &days) in (1u8..=12).zip(DAYS_IN_MONTH.iter()) {
            for day in 1..=days {
                let date = MonthDay::new(month, day);
                let card = birth_card(i64::from(month), i64::from(day));
                by_date.insert(date, card);
                by_card.entry(card).or_default().push(date);
            }
        }

        Self { by_date, by_card }
    }

    /// Birth card for a month/day.
    ///
    /// Dates missing from the calendar (e.g. Apr 31) still get the arithmetic
    /// result, so this agrees with [`birth_card`] everywhere.
    #[must_use]
    pub fn birth_card(&self, month: i64, day: i64) -> CardId {
        match (u8::try_from(month), u8::try_from(day)) {
            (Ok(m), Ok(d)) => self
                .by_date
                .get(&MonthDay::new(m, d))
                .copied()
                .unwrap_or_else(|| birth_card(month, day)),
            _ => birth_card(month, day),
        }
    }

    /// Birth card for a full date.
    #[must_use]
    pub fn birth_card_for(&self, date: time::Date) -> CardId {
        self.birth_card(i64::from(u8::from(date.month())), i64::from(date.day()))
    }

    /// All calendar dates whose birth card is `card`, in calendar order.
    #[must_use]
    pub fn dates_for(&self, card: CardId) -> &[MonthDay] {
        self.by_card
            .get(&card)
            .map(|dates| dates.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the month/day exists on a leap calendar.
    #[must_use]
    pub fn is_valid_birth_date(&self, month: i64, day: i64) -> bool {
        match (u8::try_from(month), u8::try_from(day)) {
            (Ok(m), Ok(d)) => self.by_date.contains_key(&MonthDay::new(m, d)),
            _ => false,
        }
    }

    /// Every (date, card) pair in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (MonthDay, CardId)> + '_ {
        let mut dates: Vec<_> = self.by_date.iter().map(|(&d, &c)| (d, c)).collect();
        dates.sort_unstable_by_key(|&(date, _)| date);
        dates.into_iter()
    }

    /// Number of calendar dates in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

impl Default for BirthCardLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_leap_calendar() {
        let lookup = BirthCardLookup::new();
        assert_eq!(lookup.len(), 366);
        assert!(lookup.is_valid_birth_date(2, 29));
        assert!(!lookup.is_valid_birth_date(2, 30));
        assert!(!lookup.is_valid_birth_date(4, 31));
        assert!(!lookup.is_valid_birth_date(13, 1));
        assert!(!lookup.is_valid_birth_date(-1, 1));
    }

    #[test]
    fn test_agrees_with_formula() {
        let lookup = BirthCardLookup::new();
        for month in 1..=12 {
            for day in 1..=31 {
                assert_eq!(lookup.birth_card(month, day), birth_card(month, day));
            }
        }
    }

    #[test]
    fn test_reverse_lookup_is_ordered() {
        let lookup = BirthCardLookup::new();
        let king_of_spades = lookup.dates_for(CardId::new(52).unwrap());
        assert_eq!(king_of_spades, &[MonthDay::new(1, 1)]);

        let dates = lookup.dates_for(CardId::new(28).unwrap());
        assert!(dates.contains(&MonthDay::new(6, 15)));
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        for date in dates {
            assert_eq!(
                lookup.birth_card(i64::from(date.month), i64::from(date.day)),
                CardId::new(28).unwrap()
            );
        }
    }

    #[test]
    fn test_reverse_lookup_partitions_calendar() {
        let lookup = BirthCardLookup::new();
        let total: usize = CardId::all().map(|c| lookup.dates_for(c).len()).sum();
        assert_eq!(total, lookup.len());
    }

    #[test]
    fn test_iter_is_calendar_ordered() {
        let lookup = BirthCardLookup::new();
        let entries: Vec<_> = lookup.iter().collect();
        assert_eq!(entries.first().map(|e| e.0), Some(MonthDay::new(1, 1)));
        assert_eq!(entries.last().map(|e| e.0), Some(MonthDay::new(12, 31)));
        assert_eq!(entries.len(), 366);
    }

    #[test]
    fn test_birth_card_for_date() {
        let lookup = BirthCardLookup::new();
        let date = time::macros::date!(1990 - 06 - 15);
        assert_eq!(lookup.birth_card_for(date).raw(), 28);
    }

    #[test]
    fn test_month_day_display() {
        assert_eq!(MonthDay::new(2, 9).to_string(), "02-09");
    }
}
