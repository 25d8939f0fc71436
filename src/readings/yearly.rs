//! Yearly (long-range) card.
//!
//! The spread advances once per completed seven-year cycle of life (plus
//! the first), and the age within that cycle is the offset from the birth
//! card's slot. Before the first seven years are complete the birth card is
//! located in the written buffer rather than the read one.

use super::{cycle_count, recover, require_card, wrap_slot};
use crate::cards::CardId;
use crate::core::{ReadingError, ReadingResult, DAYS_PER_WEEK};
use crate::spread::Spread;

/// Years in one long-range cycle.
pub const YEARS_PER_CYCLE: i64 = DAYS_PER_WEEK;

/// Yearly card at `age`, reporting why it could not be computed.
///
/// ```
/// use destiny_cards::readings::try_yearly_card;
///
/// assert_eq!(try_yearly_card(28, 0).unwrap().raw(), 50);
/// assert_eq!(try_yearly_card(28, 35).unwrap().raw(), 24);
/// assert!(try_yearly_card(28, -1).is_err());
/// ```
pub fn try_yearly_card(birth_card: i64, age: i64) -> ReadingResult<CardId> {
    let card = require_card(birth_card)?;
    if age < 0 {
        return Err(ReadingError::invalid("age", age));
    }

    let completed = age / YEARS_PER_CYCLE;
    if completed < 1 {
        let spread = Spread::cycled(1);
        let slot = spread
            .position_in_next(card)
            .ok_or(ReadingError::lookup(card, 1))?;
        let adjusted = wrap_slot(slot as i64 + age + 1);
        return spread
            .card_in_next(adjusted)
            .ok_or(ReadingError::lookup(card, 1));
    }

    let cycles = cycle_count("age", completed + 1)?;
    let spread = Spread::cycled(cycles);
    let slot = spread
        .position_in_current(card)
        .ok_or(ReadingError::lookup(card, cycles))?;
    let year_in_cycle = age - completed * YEARS_PER_CYCLE;
    let adjusted = wrap_slot(slot as i64 + year_in_cycle + 1);
    spread
        .card_in_next(adjusted)
        .ok_or(ReadingError::lookup(card, cycles))
}

/// Yearly card at `age`.
///
/// Invalid birth card or negative age gives [`CardId::FALLBACK`].
#[must_use]
pub fn yearly_card(birth_card: i64, age: i64) -> CardId {
    recover("yearly card", try_yearly_card(birth_card, age))
}
