//! 52-day period cards.
//!
//! A year of life is split into seven 52-day periods. The period card
//! depends on the age (one more cycle per year) and the period number,
//! which is used directly as the offset from the birth card's slot.

use time::Date;

use super::planet::Planet;
use super::{cycle_count, recover, require_card, wrap_slot};
use crate::cards::CardId;
use crate::core::{days_between, ReadingError, ReadingResult};
use crate::spread::Spread;

/// Number of 52-day periods in a year.
pub const PERIODS_PER_YEAR: u8 = 7;

/// Length of one period in days.
pub const PERIOD_DAYS: i64 = 52;

const DAYS_PER_YEAR: i64 = 365;

/// Card for period `period` (1..=7) of the year starting at `age`.
///
/// ```
/// use destiny_cards::readings::try_period_card;
///
/// assert_eq!(try_period_card(28, 36, 7).unwrap().raw(), 13);
/// assert!(try_period_card(28, 36, 8).is_err());
/// ```
pub fn try_period_card(birth_card: i64, age: i64, period: i64) -> ReadingResult<CardId> {
    let card = require_card(birth_card)?;
    if age < 0 {
        return Err(ReadingError::invalid("age", age));
    }
    if !(1..=i64::from(PERIODS_PER_YEAR)).contains(&period) {
        return Err(ReadingError::invalid("period", period));
    }

    let cycles = age
        .checked_add(1)
        .ok_or(ReadingError::invalid("age", age))?;
    let cycles = cycle_count("age", cycles)?;

    let spread = Spread::cycled(cycles);
    let slot = spread
        .position_in_current(card)
        .ok_or(ReadingError::lookup(card, cycles))?;
    let adjusted = wrap_slot(slot as i64 + period);
    spread
        .card_in_current(adjusted)
        .ok_or(ReadingError::lookup(card, cycles))
}

/// Card for a 52-day period.
///
/// Invalid birth card, negative age or a period outside 1..=7 gives
/// [`CardId::FALLBACK`].
#[must_use]
pub fn period_card(birth_card: i64, age: i64, period: i64) -> CardId {
    recover("period card", try_period_card(birth_card, age, period))
}

/// Which of the seven periods `target` falls in, counting from the birth date.
///
/// Days are taken modulo 365 (truncating, so dates before birth land in
/// period 1). Always in 1..=7.
///
/// ```
/// use destiny_cards::readings::current_period;
/// use time::macros::date;
///
/// let birth = date!(1990-06-15);
/// assert_eq!(current_period(birth, birth), 1);
/// assert_eq!(current_period(birth, date!(1990-08-06)), 2);
/// ```
#[must_use]
pub fn current_period(birth: Date, target: Date) -> u8 {
    let day_in_year = days_between(birth, target) % DAYS_PER_YEAR;
    let period = day_in_year / PERIOD_DAYS + 1;
    period.clamp(1, i64::from(PERIODS_PER_YEAR)) as u8
}

/// Period before `period`, wrapping 1 to 7.
#[must_use]
pub fn previous_period(period: u8) -> u8 {
    if period <= 1 {
        PERIODS_PER_YEAR
    } else {
        period.min(PERIODS_PER_YEAR) - 1
    }
}

/// Period after `period`, wrapping 7 to 1.
#[must_use]
pub fn next_period(period: u8) -> u8 {
    if period >= PERIODS_PER_YEAR {
        1
    } else {
        period.max(1) + 1
    }
}

/// Planet ruling a period number.
#[must_use]
pub fn period_planet(period: u8) -> Planet {
    Planet::from_index(i64::from(period))
}
