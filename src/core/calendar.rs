//! Calendar arithmetic the readings are built on.
//!
//! All functions take `time::Date`, which is already midnight-normalized, so
//! birth and target dates can never be compared in different time references.

use serde::{Deserialize, Serialize};
use time::Date;

use super::error::{ReadingError, ReadingResult};

/// Days per week, also the number of planetary periods.
pub const DAYS_PER_WEEK: i64 = 7;

/// Oldest age a birth date may give.
pub const MAX_AGE: i64 = 150;

/// Whole days from `birth` to `target`. Negative when `target` is earlier.
#[must_use]
pub fn days_between(birth: Date, target: Date) -> i64 {
    (target - birth).whole_days()
}

/// A day count split into whole weeks and leftover days.
///
/// Uses truncating division, so negative day counts give a negative (or
/// zero) week count and a remainder in -6..=0.
///
/// ```
/// use destiny_cards::core::WeekSplit;
///
/// let split = WeekSplit::from_days(17);
/// assert_eq!((split.weeks, split.remainder), (2, 3));
///
/// let split = WeekSplit::from_days(-9);
/// assert_eq!((split.weeks, split.remainder), (-1, -2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSplit {
    pub days: i64,
    pub weeks: i64,
    pub remainder: i64,
}

impl WeekSplit {
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self {
            days,
            weeks: days / DAYS_PER_WEEK,
            remainder: days % DAYS_PER_WEEK,
        }
    }

    #[must_use]
    pub fn between(birth: Date, target: Date) -> Self {
        Self::from_days(days_between(birth, target))
    }
}

/// Whole calendar years from `birth` to `reference`, floored at 0.
///
/// A year is complete on the anniversary's month and day. Someone born on
/// Feb 29 completes a year on Mar 1 in common years.
#[must_use]
pub fn age_on(birth: Date, reference: Date) -> i64 {
    let mut years = i64::from(reference.year()) - i64::from(birth.year());
    let anniversary_reached =
        (u8::from(reference.month()), reference.day()) >= (u8::from(birth.month()), birth.day());
    if !anniversary_reached {
        years -= 1;
    }
    years.max(0)
}

/// Check that `birth` is a plausible birth date as seen from `today`.
///
/// A birth date after `today` is reported as a negative `days since birth`.
/// An age over [`MAX_AGE`] is reported as `age`.
///
/// ```
/// use destiny_cards::core::validate_birth_date;
/// use time::macros::date;
///
/// let today = date!(2026-10-16);
/// assert!(validate_birth_date(date!(1990-06-15), today).is_ok());
/// assert!(validate_birth_date(date!(2027-01-01), today).is_err());
/// assert!(validate_birth_date(date!(1850-01-01), today).is_err());
/// ```
pub fn validate_birth_date(birth: Date, today: Date) -> ReadingResult<()> {
    if birth > today {
        return Err(ReadingError::invalid("days since birth", days_between(birth, today)));
    }
    let age = age_on(birth, today);
    if age > MAX_AGE {
        return Err(ReadingError::invalid("age", age));
    }
    Ok(())
}
