//! Reading configuration.
//!
//! Every reading compares two calendar dates. Instants are turned into dates
//! through a single UTC offset held here, so birth and target dates are
//! always normalized the same way.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, UtcOffset};

use super::calendar;
use super::error::ReadingResult;

/// Configuration shared by every reading for one person.
///
/// ## Example
///
/// ```
/// use destiny_cards::core::ReadingConfig;
/// use time::macros::{date, datetime, offset};
///
/// let config = ReadingConfig::default().with_utc_offset(offset!(-5));
///
/// // 02:30 UTC is still the previous evening five hours west
/// let instant = datetime!(2024-03-10 02:30 UTC);
/// assert_eq!(config.calendar_date(instant), date!(2024-03-09));
///
/// let exploring = config.with_exploration_date(date!(2030-01-01));
/// assert_eq!(exploring.as_of(instant), date!(2030-01-01));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingConfig {
    /// Offset used to turn any instant into a calendar date.
    pub utc_offset: UtcOffset,

    /// Date to read for instead of today. `None` reads for the actual date.
    pub exploration_date: Option<Date>,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            utc_offset: UtcOffset::UTC,
            exploration_date: None,
        }
    }
}

impl ReadingConfig {
    /// Use the given offset for all date normalization.
    #[must_use]
    pub fn with_utc_offset(mut self, offset: UtcOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Read for a fixed date instead of the current one.
    #[must_use]
    pub fn with_exploration_date(mut self, date: Date) -> Self {
        self.exploration_date = Some(date);
        self
    }

    /// Go back to reading for the current date.
    #[must_use]
    pub fn without_exploration_date(mut self) -> Self {
        self.exploration_date = None;
        self
    }

    /// Calendar date of `instant` in the configured offset.
    #[must_use]
    pub fn calendar_date(&self, instant: OffsetDateTime) -> Date {
        instant.to_offset(self.utc_offset).date()
    }

    /// Date a reading should be computed for, given the current instant.
    #[must_use]
    pub fn as_of(&self, now: OffsetDateTime) -> Date {
        self.exploration_date
            .unwrap_or_else(|| self.calendar_date(now))
    }

    /// Check `birth` against the actual date of `now` in the configured offset.
    ///
    /// The exploration date is ignored: a birth date is judged against today.
    pub fn validate_birth_date(&self, birth: Date, now: OffsetDateTime) -> ReadingResult<()> {
        calendar::validate_birth_date(birth, self.calendar_date(now))
    }
}
