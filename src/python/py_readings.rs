//! Reading bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use time::{Date, Month};

use crate::core;
use crate::readings::{self, DailyCard};

use super::py_cards::PyCardId;

/// Build a date from a Python `(year, month, day)` tuple.
fn to_date((year, month, day): (i32, u8, u8)) -> PyResult<Date> {
    let month = Month::try_from(month).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Date::from_calendar_date(year, month, day).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python wrapper for DailyCard.
#[pyclass(name = "DailyCard")]
#[derive(Clone, Debug)]
pub struct PyDailyCard(pub DailyCard);

#[pymethods]
impl PyDailyCard {
    /// Get the day's card.
    #[getter]
    fn card(&self) -> PyCardId {
        PyCardId(self.0.card)
    }

    /// Get the planetary period name.
    #[getter]
    fn planet_name(&self) -> &'static str {
        self.0.planet_name()
    }

    /// Get the 1-based planetary period number.
    #[getter]
    fn planet_index(&self) -> u8 {
        self.0.planet_index()
    }

    fn __repr__(&self) -> String {
        format!(
            "DailyCard(card={}, planet={})",
            self.0.card.raw(),
            self.0.planet_name()
        )
    }
}

/// Birth card for a month and day.
#[pyfunction]
pub fn birth_card(month: i64, day: i64) -> PyCardId {
    PyCardId(readings::birth_card(month, day))
}

/// Daily card for a target date.
#[pyfunction]
pub fn daily_card(
    birth: (i32, u8, u8),
    birth_card: i64,
    target: (i32, u8, u8),
) -> PyResult<PyDailyCard> {
    Ok(PyDailyCard(readings::daily_card(
        to_date(birth)?,
        birth_card,
        to_date(target)?,
    )))
}

/// Yearly card at an age.
#[pyfunction]
pub fn yearly_card(birth_card: i64, age: i64) -> PyCardId {
    PyCardId(readings::yearly_card(birth_card, age))
}

/// Card for a 52-day period (1..=7) at an age.
#[pyfunction]
pub fn period_card(birth_card: i64, age: i64, period: i64) -> PyCardId {
    PyCardId(readings::period_card(birth_card, age, period))
}

/// Current 52-day period number (1..=7).
#[pyfunction]
pub fn current_period(birth: (i32, u8, u8), target: (i32, u8, u8)) -> PyResult<u8> {
    Ok(readings::current_period(to_date(birth)?, to_date(target)?))
}

/// Whole years from birth to a reference date, at least 0.
#[pyfunction]
pub fn age_on(birth: (i32, u8, u8), reference: (i32, u8, u8)) -> PyResult<i64> {
    Ok(core::age_on(to_date(birth)?, to_date(reference)?))
}
