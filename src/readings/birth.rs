//! Birth card: `55 - (day + 2 * month)`.

use time::Date;

use super::recover;
use crate::cards::CardId;
use crate::core::{ReadingError, ReadingResult};

const BASE: i64 = 55;

/// Birth card for a month and day.
///
/// Month must be in 1..=12 and day in 1..=31. The day is not checked against
/// the month: Feb 30 is accepted and gives a card like any other date.
///
/// ```
/// use destiny_cards::readings::try_birth_card;
///
/// assert_eq!(try_birth_card(1, 1).unwrap().raw(), 52);
/// assert_eq!(try_birth_card(6, 15).unwrap().raw(), 28);
/// assert!(try_birth_card(12, 31).is_err());
/// assert!(try_birth_card(13, 1).is_err());
/// ```
pub fn try_birth_card(month: i64, day: i64) -> ReadingResult<CardId> {
    if !(1..=12).contains(&month) {
        return Err(ReadingError::invalid("month", month));
    }
    if !(1..=31).contains(&day) {
        return Err(ReadingError::invalid("day", day));
    }

    let raw = BASE - (day + 2 * month);
    CardId::new(raw).ok_or(ReadingError::invalid("birth card", raw))
}

/// Birth card for a month and day, or the Ace of Hearts if there is none.
#[must_use]
pub fn birth_card(month: i64, day: i64) -> CardId {
    recover("birth card", try_birth_card(month, day))
}

/// Birth card for a calendar date. The year is ignored.
#[must_use]
pub fn birth_card_for(date: Date) -> CardId {
    birth_card(i64::from(u8::from(date.month())), i64::from(date.day()))
}
