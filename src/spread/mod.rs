//! Spread engine: the fixed transformation and the arrays it acts on.
//!
//! - `table`: The canonical `(source, destination)` table and its structure
//! - `engine`: `Spread`, the double-buffered working arrays
//!
//! A reading resets a spread, cycles it a number of times determined by
//! the person's age or days lived, then looks up where the birth card went.

pub mod engine;
pub mod table;

pub use engine::{Spread, CANONICAL_ORDER, SLOTS};
pub use table::{Transformation, TRANSFORMATION};
