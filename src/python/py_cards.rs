//! Card type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::CardId;

/// Python wrapper for CardId.
#[pyclass(name = "CardId")]
#[derive(Clone, Debug)]
pub struct PyCardId(pub CardId);

#[pymethods]
impl PyCardId {
    /// Create a card ID, raising ValueError outside 1..=52.
    #[new]
    fn new(id: i64) -> PyResult<Self> {
        CardId::new(id)
            .map(Self)
            .ok_or_else(|| PyValueError::new_err(format!("card id {id} outside 1..=52")))
    }

    /// Get the raw ID value.
    #[getter]
    fn raw(&self) -> u8 {
        self.0.raw()
    }

    /// Full card name, e.g. "Ace of Hearts".
    #[getter]
    fn name(&self) -> String {
        self.0.name()
    }

    /// Short label, e.g. "AH".
    #[getter]
    fn short_name(&self) -> String {
        self.0.short_name()
    }

    #[getter]
    fn suit(&self) -> &'static str {
        self.0.suit().name()
    }

    #[getter]
    fn rank(&self) -> &'static str {
        self.0.rank().name()
    }

    fn __repr__(&self) -> String {
        format!("CardId({})", self.0.raw())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.raw())
    }
}
