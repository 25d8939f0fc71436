//! Card readings: the questions a caller can ask about a birth date.
//!
//! Every reading has two forms:
//! - `try_*` returns `ReadingResult` and reports why it failed
//! - the plain form never fails and substitutes the documented fallback
//!
//! ## Fallbacks
//!
//! | Reading | Invalid input | Lookup failure |
//! |---|---|---|
//! | `birth_card` | `CardId::FALLBACK` | n/a |
//! | `daily_card` | input card if in the deck, else `CardId::FALLBACK`; Mercury | input card, Mercury |
//! | `yearly_card` | `CardId::FALLBACK` | input card |
//! | `period_card` | `CardId::FALLBACK` | input card |
//!
//! Each reading builds its own `Spread`, so readings can run on any thread.

pub mod birth;
pub mod daily;
pub mod lookup;
pub mod period;
pub mod planet;
pub mod snapshot;
pub mod yearly;

pub use birth::{birth_card, birth_card_for, try_birth_card};
pub use daily::{daily_card, try_daily_card, DailyCard};
pub use lookup::{BirthCardLookup, CardDates, MonthDay};
pub use period::{
    current_period, next_period, period_card, period_planet, previous_period, try_period_card,
    PERIODS_PER_YEAR, PERIOD_DAYS,
};
pub use planet::Planet;
pub use snapshot::{Around, Reading};
pub use yearly::{try_yearly_card, yearly_card, YEARS_PER_CYCLE};

use crate::cards::{CardId, DECK_SIZE};
use crate::core::{ReadingError, ReadingResult};

/// Bring a slot that ran one lap past the deck back into 1..=52.
///
/// Only a single lap is removed; anything still out of range is left for
/// the caller's bounds check to reject.
pub(crate) fn wrap_slot(slot: i64) -> i64 {
    let deck = i64::from(DECK_SIZE);
    if slot > deck {
        log::trace!("slot {slot} wrapped to {}", slot - deck);
        slot - deck
    } else {
        slot
    }
}

/// Validate a raw birth card argument.
pub(crate) fn require_card(raw: i64) -> ReadingResult<CardId> {
    CardId::new(raw).ok_or(ReadingError::invalid("birth card", raw))
}

/// Convert a non-negative cycle count, rejecting negatives and overflow.
pub(crate) fn cycle_count(field: &'static str, value: i64) -> ReadingResult<usize> {
    usize::try_from(value).map_err(|_| ReadingError::invalid(field, value))
}

/// Map a card reading's error onto its fallback.
///
/// Invalid input falls back to [`CardId::FALLBACK`], a failed lookup to the
/// birth card it was computed for.
pub(crate) fn recover(reading: &str, result: ReadingResult<CardId>) -> CardId {
    match result {
        Ok(card) => card,
        Err(err @ ReadingError::InvalidInput { .. }) => {
            log::warn!("{reading}: {err}, using {}", CardId::FALLBACK);
            CardId::FALLBACK
        }
        Err(err @ ReadingError::LookupFailure { card, .. }) => {
            log::warn!("{reading}: {err}, using birth card");
            card
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_slot() {
        assert_eq!(wrap_slot(1), 1);
        assert_eq!(wrap_slot(52), 52);
        assert_eq!(wrap_slot(53), 1);
        assert_eq!(wrap_slot(59), 7);
        assert_eq!(wrap_slot(0), 0);
        assert_eq!(wrap_slot(120), 68);
    }

    #[test]
    fn test_cycle_count() {
        assert_eq!(cycle_count("age", 0), Ok(0));
        assert_eq!(cycle_count("age", 12), Ok(12));
        assert_eq!(cycle_count("age", -1), Err(ReadingError::invalid("age", -1)));
    }

    #[test]
    fn test_recover() {
        let card = CardId::new(30).unwrap();
        assert_eq!(recover("test", Ok(card)), card);
        assert_eq!(
            recover("test", Err(ReadingError::invalid("age", -2))),
            CardId::FALLBACK
        );
        assert_eq!(recover("test", Err(ReadingError::lookup(card, 3))), card);
    }
}
