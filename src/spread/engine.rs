//! The spread engine: two working arrays and the cycle that moves cards between them.
//!
//! ## Buffers
//!
//! `current` is read, `next` is written. After a cycle `next` is copied back
//! into `current`, so both buffers hold the same arrangement whenever a
//! cycle has completed. Readings still name the buffer they read from.
//!
//! ## Usage
//!
//! ```
//! use destiny_cards::cards::CardId;
//! use destiny_cards::spread::Spread;
//!
//! let spread = Spread::cycled(1);
//! // Slot 3 moves to slot 1 on every cycle
//! assert_eq!(spread.current()[1], 3);
//!
//! let ace = CardId::new(1).unwrap();
//! assert_eq!(spread.position_in_current(ace), Some(27));
//! ```

use crate::cards::CardId;

use super::table::Transformation;

/// Slots per buffer. Slot 0 is unused so that slot `i` starts out holding card `i`.
pub const SLOTS: usize = 53;

/// Cycles after which the canonical transformation returns every card home.
pub const CANONICAL_ORDER: usize = 90;

const IDENTITY: [u8; SLOTS] = identity();

const fn identity() -> [u8; SLOTS] {
    let mut slots = [0u8; SLOTS];
    let mut i = 0;
    while i < SLOTS {
        slots[i] = i as u8;
        i += 1;
    }
    slots
}

/// Working state for a single reading.
///
/// Each derivation builds its own `Spread`, so nothing is shared between calls.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Spread {
    current: [u8; SLOTS],
    next: [u8; SLOTS],
}

impl Spread {
    /// Create a spread in the identity arrangement.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: IDENTITY,
            next: IDENTITY,
        }
    }

    /// Spread after `cycles` applications of the canonical transformation, from identity.
    ///
    /// `cycled(0)` is the identity arrangement.
    #[must_use]
    pub fn cycled(cycles: usize) -> Self {
        let mut spread = Self::new();
        spread.run(cycles);
        spread
    }

    /// Put both buffers back to the identity arrangement.
    pub fn reset(&mut self) {
        self.current = IDENTITY;
        self.next = IDENTITY;
    }

    /// Reset, then cycle `cycles` times.
    ///
    /// The canonical transformation has order [`CANONICAL_ORDER`], so whole
    /// multiples of it are skipped. The resulting buffers are identical to
    /// cycling naively.
    pub fn run(&mut self, cycles: usize) {
        self.reset();
        let effective = cycles % CANONICAL_ORDER;
        log::trace!("running spread for {cycles} cycles ({effective} effective)");
        for _ in 0..effective {
            self.cycle();
        }
    }

    /// Apply the canonical transformation once.
    pub fn cycle(&mut self) {
        self.cycle_with(&Transformation::canonical());
    }

    /// Apply an arbitrary transformation once.
    ///
    /// Pairs naming a slot outside 1..=52 are skipped. Slots no pair writes
    /// keep whatever `next` already held.
    pub fn cycle_with(&mut self, transformation: &Transformation<'_>) {
        for &(src, dst) in transformation.pairs() {
            if !Transformation::in_range(src) || !Transformation::in_range(dst) {
                log::warn!("skipping malformed transformation pair ({src}, {dst})");
                continue;
            }
            self.next[dst as usize] = self.current[src as usize];
        }
        self.current[1..].copy_from_slice(&self.next[1..]);
    }

    /// The buffer a cycle reads from.
    #[must_use]
    pub const fn current(&self) -> &[u8; SLOTS] {
        &self.current
    }

    /// The buffer a cycle writes into.
    #[must_use]
    pub const fn next(&self) -> &[u8; SLOTS] {
        &self.next
    }

    /// Slot holding `card` in the current buffer.
    #[must_use]
    pub fn position_in_current(&self, card: CardId) -> Option<usize> {
        position(&self.current, card)
    }

    /// Slot holding `card` in the next buffer.
    #[must_use]
    pub fn position_in_next(&self, card: CardId) -> Option<usize> {
        position(&self.next, card)
    }

    /// Card at `slot` in the current buffer, if the slot is in 1..=52.
    #[must_use]
    pub fn card_in_current(&self, slot: i64) -> Option<CardId> {
        card_at(&self.current, slot)
    }

    /// Card at `slot` in the next buffer, if the slot is in 1..=52.
    #[must_use]
    pub fn card_in_next(&self, slot: i64) -> Option<CardId> {
        card_at(&self.next, slot)
    }

    /// Whether the current buffer is the identity arrangement.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.current == IDENTITY
    }
}

impl Default for Spread {
    fn default() -> Self {
        Self::new()
    }
}

fn position(slots: &[u8; SLOTS], card: CardId) -> Option<usize> {
    (1..SLOTS).find(|&slot| slots[slot] == card.raw())
}

fn card_at(slots: &[u8; SLOTS], slot: i64) -> Option<CardId> {
    let index = usize::try_from(slot).ok().filter(|i| (1..SLOTS).contains(i))?;
    CardId::new(i64::from(slots[index]))
}
