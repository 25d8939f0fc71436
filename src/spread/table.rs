//! The fixed transformation applied to a spread on every cycle.
//!
//! Each pair is `(source, destination)`: one cycle copies the card at
//! `source` in the current spread into `destination` in the next one.
//! Slots 11, 21 and 52 are never touched and keep their cards forever.

use smallvec::SmallVec;

use super::engine::SLOTS;

/// The canonical transformation, one `(source, destination)` pair per moved slot.
#[rustfmt::skip]
pub const TRANSFORMATION: [(u8, u8); 49] = [
    (1, 27), (2, 14), (3, 1), (4, 43), (5, 30), (6, 17), (7, 8), (8, 46), (9, 33), (10, 24),
    (12, 49), (13, 15), (14, 2), (15, 40), (16, 31), (17, 18), (18, 5), (19, 47), (20, 34),
    (22, 12), (23, 50), (24, 37), (25, 3), (26, 41), (27, 28), (28, 19), (29, 6), (30, 44),
    (31, 35), (32, 22), (33, 9), (34, 51), (35, 38), (36, 25), (37, 42), (38, 29), (39, 16),
    (40, 7), (41, 45), (42, 32), (43, 23), (44, 10), (45, 48), (46, 39), (47, 26), (48, 13),
    (49, 4), (50, 20), (51, 36),
];

/// A set of `(source, destination)` moves over slots 1..=52.
///
/// Wraps either the canonical [`TRANSFORMATION`] or a caller-supplied table,
/// and answers structural questions about it.
///
/// ## Example
///
/// ```
/// use destiny_cards::spread::Transformation;
///
/// let t = Transformation::canonical();
/// assert!(t.is_bijection());
/// assert_eq!(t.fixed_points(), vec![11, 21, 52]);
/// assert_eq!(t.order(), Some(90));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transformation<'a> {
    pairs: &'a [(u8, u8)],
}

impl Transformation<'static> {
    /// The transformation every reading uses.
    #[must_use]
    pub const fn canonical() -> Self {
        Self {
            pairs: &TRANSFORMATION,
        }
    }
}

impl<'a> Transformation<'a> {
    /// Wrap an arbitrary table. Nothing is validated here; see [`is_bijection`](Self::is_bijection).
    #[must_use]
    pub const fn from_pairs(pairs: &'a [(u8, u8)]) -> Self {
        Self { pairs }
    }

    #[must_use]
    pub const fn pairs(&self) -> &'a [(u8, u8)] {
        self.pairs
    }

    /// Whether a slot index is usable by a pair.
    #[must_use]
    pub fn in_range(slot: u8) -> bool {
        (1..SLOTS as u8).contains(&slot)
    }

    /// Whether every pair is in range and sources and destinations are
    /// the same set, each used once.
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        let mut sources = [false; SLOTS];
        let mut destinations = [false; SLOTS];

        for &(src, dst) in self.pairs {
            if !Self::in_range(src) || !Self::in_range(dst) {
                return false;
            }
            if sources[src as usize] || destinations[dst as usize] {
                return false;
            }
            sources[src as usize] = true;
            destinations[dst as usize] = true;
        }

        sources == destinations
    }

    /// Slots that no pair moves, ascending.
    #[must_use]
    pub fn fixed_points(&self) -> Vec<u8> {
        let mut moved = [false; SLOTS];
        for &(src, dst) in self.pairs {
            if Self::in_range(src) && Self::in_range(dst) && src != dst {
                moved[src as usize] = true;
                moved[dst as usize] = true;
            }
        }
        (1..SLOTS as u8).filter(|&slot| !moved[slot as usize]).collect()
    }

    /// Where a card sitting at `slot` lands after one cycle.
    ///
    /// Slots not named as a source stay put.
    #[must_use]
    pub fn image(&self, slot: u8) -> u8 {
        self.pairs
            .iter()
            .find(|&&(src, dst)| src == slot && Self::in_range(dst))
            .map_or(slot, |&(_, dst)| dst)
    }

    /// Lengths of the permutation's cycles, ascending. Fixed points count as length 1.
    ///
    /// Only meaningful for a bijection; returns an empty list otherwise.
    #[must_use]
    pub fn cycle_lengths(&self) -> SmallVec<[usize; 8]> {
        let mut lengths = SmallVec::new();
        if !self.is_bijection() {
            return lengths;
        }

        let mut seen = [false; SLOTS];
        for start in 1..SLOTS as u8 {
            if seen[start as usize] {
                continue;
            }
            let mut len = 0;
            let mut slot = start;
            while !seen[slot as usize] {
                seen[slot as usize] = true;
                slot = self.image(slot);
                len += 1;
            }
            lengths.push(len);
        }

        lengths.sort_unstable();
        lengths
    }

    /// Number of cycles after which every spread returns to where it started.
    ///
    /// `None` when the table is not a bijection.
    #[must_use]
    pub fn order(&self) -> Option<usize> {
        let lengths = self.cycle_lengths();
        if lengths.is_empty() {
            return None;
        }
        Some(lengths.iter().fold(1, |acc, &len| lcm(acc, len)))
    }
}

impl Default for Transformation<'static> {
    fn default() -> Self {
        Self::canonical()
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}
