//! Core engine types: errors, configuration, calendar arithmetic.
//!
//! This module contains the pieces every reading shares. Readings never
//! read the clock themselves; callers pass dates, or go through
//! `ReadingConfig` to turn an instant into a date.

pub mod calendar;
pub mod config;
pub mod error;

pub use calendar::{
    age_on, days_between, validate_birth_date, WeekSplit, DAYS_PER_WEEK, MAX_AGE,
};
pub use config::ReadingConfig;
pub use error::{ReadingError, ReadingResult};
