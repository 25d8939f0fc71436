//! # destiny-cards
//!
//! A Cards of Destiny reading engine: which of the 52 cards governs a
//! birth, a day, a year of life, or a 52-day period.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every reading is a pure function of its inputs.
//!    Nothing reads the clock unless the caller passes an instant through
//!    `ReadingConfig`.
//!
//! 2. **No Shared State**: Each reading builds its own `Spread`, so readings
//!    can run concurrently without locking.
//!
//! 3. **Never Fails Outward**: Plain readings substitute a documented
//!    fallback card. `try_*` readings report the `ReadingError` instead.
//!
//! ## Architecture
//!
//! - **Transformation**: A fixed 49-pair permutation of slots 1..=52.
//!
//! - **Spread**: Two 53-slot buffers the transformation is cycled over.
//!   The canonical transformation has order 90, so long cycle counts are
//!   reduced before running.
//!
//! - **Readings**: Calendar arithmetic decides how many cycles to run and
//!   which offset from the birth card's slot to read.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, calendar arithmetic
//! - `cards`: Card ids and deck faces
//! - `spread`: Transformation table and spread engine
//! - `readings`: Birth card table, daily, yearly and 52-day period readings

pub mod core;
pub mod cards;
pub mod spread;
pub mod readings;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ReadingError, ReadingResult, ReadingConfig,
    WeekSplit, age_on, days_between, validate_birth_date,
};

pub use crate::cards::{CardId, Suit, Rank};

pub use crate::spread::{Spread, Transformation, TRANSFORMATION};

pub use crate::readings::{
    birth_card, birth_card_for, try_birth_card, BirthCardLookup, MonthDay,
    daily_card, try_daily_card, DailyCard, Planet,
    yearly_card, try_yearly_card,
    period_card, try_period_card, current_period,
    Reading, Around,
};
