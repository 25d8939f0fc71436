//! Planetary periods.

use serde::{Deserialize, Serialize};

/// One of the seven planetary periods, numbered 1..=7 from Mercury.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury = 1,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets in period order.
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Planet for a 1-based period number, clamped to 1..=7.
    ///
    /// ```
    /// use destiny_cards::readings::Planet;
    ///
    /// assert_eq!(Planet::from_index(1), Planet::Mercury);
    /// assert_eq!(Planet::from_index(7), Planet::Neptune);
    /// assert_eq!(Planet::from_index(-3), Planet::Mercury);
    /// assert_eq!(Planet::from_index(12), Planet::Neptune);
    /// ```
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        Self::ALL[(index.clamp(1, 7) - 1) as usize]
    }

    /// 1-based period number.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
