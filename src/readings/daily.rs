//! Daily card: one card and one planetary period for each day of a life.
//!
//! The spread advances one cycle per completed week since birth (plus the
//! first). The day within the week picks both the offset from the birth
//! card's slot and the planet.
//!
//! Target dates before the birth date use truncating division: up to six
//! days early still reads from the first week with a negative offset, a
//! full week or more early is invalid input.

use serde::{Deserialize, Serialize};
use time::Date;

use super::planet::Planet;
use super::{cycle_count, require_card, wrap_slot};
use crate::cards::CardId;
use crate::core::{ReadingError, ReadingResult, WeekSplit};
use crate::spread::Spread;

/// A day's card and its planetary period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyCard {
    pub card: CardId,
    pub planet: Planet,
}

impl DailyCard {
    /// Card paired with Mercury, used when no reading can be made.
    #[must_use]
    pub const fn fallback(card: CardId) -> Self {
        Self {
            card,
            planet: Planet::Mercury,
        }
    }

    /// 1-based planetary period number.
    #[must_use]
    pub const fn planet_index(&self) -> u8 {
        self.planet.index()
    }

    #[must_use]
    pub const fn planet_name(&self) -> &'static str {
        self.planet.name()
    }
}

/// Daily card for `target`, reporting why it could not be computed.
///
/// ```
/// use destiny_cards::readings::{try_daily_card, Planet};
/// use time::macros::date;
///
/// let birth = date!(1990-06-15);
/// let today = try_daily_card(birth, 28, birth).unwrap();
/// assert_eq!(today.card.raw(), 50);
/// assert_eq!(today.planet, Planet::Mercury);
///
/// assert!(try_daily_card(birth, 0, birth).is_err());
/// ```
pub fn try_daily_card(birth: Date, birth_card: i64, target: Date) -> ReadingResult<DailyCard> {
    let card = require_card(birth_card)?;
    let split = WeekSplit::between(birth, target);

    let cycles = split
        .weeks
        .checked_add(1)
        .filter(|&cycles| cycles >= 1)
        .ok_or(ReadingError::invalid("days since birth", split.days))?;
    let cycles = cycle_count("days since birth", cycles)?;

    let spread = Spread::cycled(cycles);
    let slot = spread
        .position_in_current(card)
        .ok_or(ReadingError::lookup(card, cycles))?;

    let adjusted = wrap_slot(slot as i64 + 1 + split.remainder);
    let result = spread
        .card_in_next(adjusted)
        .ok_or(ReadingError::lookup(card, cycles))?;

    Ok(DailyCard {
        card: result,
        planet: Planet::from_index(split.remainder + 1),
    })
}

/// Daily card for `target`.
///
/// Never fails: anything that cannot be read returns the birth card with
/// Mercury, or [`CardId::FALLBACK`] with Mercury when the birth card is not
/// in the deck.
#[must_use]
pub fn daily_card(birth: Date, birth_card: i64, target: Date) -> DailyCard {
    try_daily_card(birth, birth_card, target).unwrap_or_else(|err| {
        let card = CardId::new(birth_card).unwrap_or(CardId::FALLBACK);
        log::warn!("daily card: {err}, using {card} with Mercury");
        DailyCard::fallback(card)
    })
}
