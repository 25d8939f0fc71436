//! Errors raised inside a derivation.
//!
//! These never reach callers of the plain reading functions. Each plain
//! function maps them onto its documented fallback card. The `try_` forms
//! return them unchanged.

use thiserror::Error;

use crate::cards::CardId;

/// Why a reading could not be computed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadingError {
    /// An input was outside its declared domain.
    #[error("invalid {field}: {value}")]
    InvalidInput {
        /// Name of the offending parameter.
        field: &'static str,
        /// The value as given.
        value: i64,
    },

    /// The birth card could not be located, or its offset slot fell outside the spread.
    #[error("{card} not resolvable after {cycles} cycles")]
    LookupFailure {
        card: CardId,
        cycles: usize,
    },
}

impl ReadingError {
    #[must_use]
    pub const fn invalid(field: &'static str, value: i64) -> Self {
        Self::InvalidInput { field, value }
    }

    #[must_use]
    pub const fn lookup(card: CardId, cycles: usize) -> Self {
        Self::LookupFailure { card, cycles }
    }

    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Result type for the `try_` readings.
pub type ReadingResult<T> = Result<T, ReadingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ReadingError::invalid("month", 13);
        assert_eq!(err.to_string(), "invalid month: 13");
        assert!(err.is_invalid_input());

        let err = ReadingError::lookup(CardId::FALLBACK, 4);
        assert_eq!(err.to_string(), "Card(1) not resolvable after 4 cycles");
        assert!(!err.is_invalid_input());
    }
}
