//! Python bindings for the destiny-cards reading engine.
//!
//! Dates cross the boundary as `(year, month, day)` tuples.
//!
//! # Quick Start
//!
//! ```python
//! import destiny_cards as dc
//!
//! card = dc.birth_card(6, 15)            # CardId(28)
//! print(card.name)                        # "Two of Diamonds"
//!
//! today = dc.daily_card((1990, 6, 15), 28, (2024, 3, 10))
//! print(today.card.raw, today.planet_name, today.planet_index)
//!
//! print(dc.yearly_card(28, 33), dc.period_card(28, 33, 5))
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_readings;

pub use py_cards::*;
pub use py_readings::*;

/// destiny_cards: birth, daily, yearly and 52-day card readings.
#[pymodule]
fn destiny_cards(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Card types
    m.add_class::<PyCardId>()?;

    // Readings
    m.add_class::<PyDailyCard>()?;
    m.add_function(wrap_pyfunction!(birth_card, m)?)?;
    m.add_function(wrap_pyfunction!(daily_card, m)?)?;
    m.add_function(wrap_pyfunction!(yearly_card, m)?)?;
    m.add_function(wrap_pyfunction!(period_card, m)?)?;
    m.add_function(wrap_pyfunction!(current_period, m)?)?;
    m.add_function(wrap_pyfunction!(age_on, m)?)?;

    Ok(())
}
