//! Complete reading for one person on one date.
//!
//! Gathers the birth card with the previous/current/next daily, yearly and
//! 52-day period cards around a date, the way a reading is usually presented.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::birth::birth_card_for;
use super::daily::{daily_card, DailyCard};
use super::period::{current_period, next_period, period_card, period_planet, previous_period};
use super::planet::Planet;
use super::yearly::yearly_card;
use crate::cards::CardId;
use crate::core::{age_on, validate_birth_date, ReadingConfig, ReadingResult};

/// Three consecutive readings centred on the date asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Around<T> {
    pub previous: T,
    pub current: T,
    pub next: T,
}

impl<T> Around<T> {
    /// Build from a function of the offset -1, 0, 1.
    pub fn from_fn(mut f: impl FnMut(i64) -> T) -> Self {
        Self {
            previous: f(-1),
            current: f(0),
            next: f(1),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Around<U> {
        Around {
            previous: f(self.previous),
            current: f(self.current),
            next: f(self.next),
        }
    }
}

/// Everything readable about a birth date as of a given date.
///
/// ## Example
///
/// ```
/// use destiny_cards::readings::Reading;
/// use time::macros::date;
///
/// let reading = Reading::compute(date!(1990-06-15), date!(2024-03-10));
/// assert_eq!(reading.birth_card.raw(), 28);
/// assert_eq!(reading.age, 33);
/// assert_eq!(reading.daily.current.card.raw(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub birth_date: Date,
    pub as_of: Date,
    /// Whole years on `as_of`.
    pub age: i64,
    pub birth_card: CardId,
    /// Yesterday, today and tomorrow.
    pub daily: Around<DailyCard>,
    /// Last year, this year and next year of age.
    pub yearly: Around<CardId>,
    /// 52-day period `as_of` falls in, 1..=7.
    pub period: u8,
    pub period_planet: Planet,
    /// Previous, current and next period at the current age. Periods wrap 1..=7.
    pub period_cards: Around<CardId>,
}

impl Reading {
    /// Compute every reading for `birth_date` as of `as_of`.
    #[must_use]
    pub fn compute(birth_date: Date, as_of: Date) -> Self {
        let birth_card = birth_card_for(birth_date);
        let card = i64::from(birth_card.raw());
        let age = age_on(birth_date, as_of);

        let daily = Around::from_fn(|offset| {
            let target = shift_days(as_of, offset);
            daily_card(birth_date, card, target)
        });

        let yearly = Around::from_fn(|offset| yearly_card(card, age + offset));

        let period = current_period(birth_date, as_of);
        let periods = Around {
            previous: previous_period(period),
            current: period,
            next: next_period(period),
        };
        let period_cards = periods.map(|p| period_card(card, age, i64::from(p)));

        log::debug!(
            "reading for {birth_date} as of {as_of}: {birth_card}, age {age}, period {period}"
        );

        Self {
            birth_date,
            as_of,
            age,
            birth_card,
            daily,
            yearly,
            period,
            period_planet: period_planet(period),
            period_cards,
        }
    }

    /// Like [`compute`](Self::compute), but rejects a birth date after `as_of`
    /// or more than [`MAX_AGE`](crate::core::MAX_AGE) years before it.
    pub fn try_compute(birth_date: Date, as_of: Date) -> ReadingResult<Self> {
        validate_birth_date(birth_date, as_of)?;
        Ok(Self::compute(birth_date, as_of))
    }

    /// Compute as of `now`, normalized and possibly overridden by `config`.
    #[must_use]
    pub fn for_instant(birth_date: Date, now: OffsetDateTime, config: &ReadingConfig) -> Self {
        Self::compute(birth_date, config.as_of(now))
    }
}

/// `date` moved by one day either way. Stays put at the ends of the calendar.
fn shift_days(date: Date, offset: i64) -> Date {
    match offset {
        o if o < 0 => date.previous_day().unwrap_or(date),
        o if o > 0 => date.next_day().unwrap_or(date),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::Planet;
    use time::macros::{date, datetime, offset};

    #[test]
    fn test_reading_matches_individual_queries() {
        let birth = date!(1990 - 06 - 15);
        let as_of = date!(2024 - 03 - 10);
        let reading = Reading::compute(birth, as_of);

        assert_eq!(reading.birth_card.raw(), 28);
        assert_eq!(reading.age, 33);
        assert_eq!(reading.daily.current, daily_card(birth, 28, as_of));
        assert_eq!(reading.daily.previous, daily_card(birth, 28, date!(2024 - 03 - 09)));
        assert_eq!(reading.daily.next, daily_card(birth, 28, date!(2024 - 03 - 11)));
        assert_eq!(reading.yearly.previous, yearly_card(28, 32));
        assert_eq!(reading.yearly.current, yearly_card(28, 33));
        assert_eq!(reading.yearly.next, yearly_card(28, 34));
        assert_eq!(reading.period, current_period(birth, as_of));
        assert_eq!(reading.period_cards.current, period_card(28, 33, i64::from(reading.period)));
    }

    #[test]
    fn test_birth_day_reading() {
        let birth = date!(1990 - 06 - 15);
        let reading = Reading::compute(birth, birth);

        assert_eq!(reading.age, 0);
        assert_eq!(reading.daily.current.card.raw(), 50);
        assert_eq!(reading.daily.current.planet, Planet::Mercury);
        // last year of age is -1: invalid, falls back
        assert_eq!(reading.yearly.previous, CardId::FALLBACK);
        assert_eq!(reading.period, 1);
        assert_eq!(reading.period_planet, Planet::Mercury);
        assert_eq!(reading.period_cards.previous, period_card(28, 0, 7));
        assert_eq!(reading.period_cards.next, period_card(28, 0, 2));
    }

    #[test]
    fn test_for_instant_uses_config() {
        let birth = date!(1990 - 06 - 15);
        let now = datetime!(2024-03-10 02:00 UTC);

        let utc = Reading::for_instant(birth, now, &ReadingConfig::default());
        assert_eq!(utc.as_of, date!(2024 - 03 - 10));

        let west = ReadingConfig::default().with_utc_offset(offset!(-8));
        assert_eq!(Reading::for_instant(birth, now, &west).as_of, date!(2024 - 03 - 09));

        let exploring = ReadingConfig::default().with_exploration_date(date!(2030 - 01 - 01));
        assert_eq!(Reading::for_instant(birth, now, &exploring).as_of, date!(2030 - 01 - 01));
    }

    #[test]
    fn test_try_compute_validates_birth_date() {
        let as_of = date!(2024 - 03 - 10);
        assert!(Reading::try_compute(date!(1990 - 06 - 15), as_of).is_ok());
        assert!(Reading::try_compute(as_of, as_of).is_ok());

        let unborn = Reading::try_compute(date!(2024 - 03 - 11), as_of).unwrap_err();
        assert!(unborn.is_invalid_input());

        let ancient = Reading::try_compute(date!(1850 - 01 - 01), as_of);
        assert_eq!(ancient, Err(crate::core::ReadingError::invalid("age", 174)));
    }

    #[test]
    fn test_around_map() {
        let around = Around::from_fn(|offset| offset * 10);
        assert_eq!(around, Around { previous: -10, current: 0, next: 10 });
        assert_eq!(around.map(|v| v + 1).next, 11);
    }

    #[test]
    fn test_shift_days_at_calendar_edges() {
        assert_eq!(shift_days(Date::MIN, -1), Date::MIN);
        assert_eq!(shift_days(Date::MAX, 1), Date::MAX);
        assert_eq!(shift_days(date!(2024 - 03 - 01), -1), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_serialization() {
        let reading = Reading::compute(date!(1990 - 06 - 15), date!(2024 - 03 - 10));
        let json = serde_json::to_string(&reading).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(reading, back);
    }
}
