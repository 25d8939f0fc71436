//! Property-based tests for readings and the spread engine.
//!
//! Uses proptest to check that every reading stays inside the deck and is
//! reproducible for all inputs in its domain.

use destiny_cards::cards::CardId;
use destiny_cards::readings::{
    birth_card, current_period, daily_card, period_card, yearly_card, Planet,
};
use destiny_cards::spread::Spread;
use proptest::prelude::*;
use time::{Date, Duration};

fn in_deck(card: CardId) -> bool {
    (1..=52).contains(&card.raw())
}

fn date_strategy() -> impl Strategy<Value = Date> {
    // 1900-01-01 plus up to ~200 years
    (0i64..73_000).prop_map(|offset| {
        time::macros::date!(1900 - 01 - 01) + Duration::days(offset)
    })
}

// =============================================================================
// Birth Cards
// =============================================================================

proptest! {
    /// birth_card stays in the deck for every month/day in range
    #[test]
    fn prop_birth_card_in_deck(month in 1i64..=12, day in 1i64..=31) {
        prop_assert!(in_deck(birth_card(month, day)));
    }

    /// birth_card stays in the deck for any input at all
    #[test]
    fn prop_birth_card_in_deck_any_input(month: i64, day: i64) {
        prop_assert!(in_deck(birth_card(month, day)));
    }

    /// birth_card is repeatable
    #[test]
    fn prop_birth_card_deterministic(month in 1i64..=12, day in 1i64..=31) {
        prop_assert_eq!(birth_card(month, day), birth_card(month, day));
    }
}

// =============================================================================
// Long-Range Readings
// =============================================================================

proptest! {
    /// yearly_card stays in the deck for every card and realistic age
    #[test]
    fn prop_yearly_in_deck(card in 1i64..=52, age in 0i64..=150) {
        prop_assert!(in_deck(yearly_card(card, age)));
    }

    /// period_card stays in the deck for every card, age and period
    #[test]
    fn prop_period_in_deck(card in 1i64..=52, age in 0i64..=150, period in 1i64..=7) {
        prop_assert!(in_deck(period_card(card, age, period)));
    }

    /// yearly and period cards do not depend on earlier calls
    #[test]
    fn prop_long_range_deterministic(card in 1i64..=52, age in 0i64..=150, period in 1i64..=7) {
        let yearly = yearly_card(card, age);
        let period_card_first = period_card(card, age, period);
        let _ = yearly_card((card % 52) + 1, age + 3);
        prop_assert_eq!(yearly_card(card, age), yearly);
        prop_assert_eq!(period_card(card, age, period), period_card_first);
    }
}

// =============================================================================
// Daily Readings and Periods
// =============================================================================

proptest! {
    /// daily_card stays in the deck and its planet matches the day of the week since birth
    #[test]
    fn prop_daily_in_deck(birth in date_strategy(), days in 0i64..40_000, card in 1i64..=52) {
        let target = birth + Duration::days(days);
        let reading = daily_card(birth, card, target);
        prop_assert!(in_deck(reading.card));
        prop_assert_eq!(reading.planet, Planet::from_index(days % 7 + 1));
    }

    /// On the birth date itself the planet is always Mercury
    #[test]
    fn prop_daily_birth_day_is_mercury(birth in date_strategy(), card in 1i64..=52) {
        let reading = daily_card(birth, card, birth);
        prop_assert_eq!(reading.planet_index(), 1);
        prop_assert_eq!(reading, daily_card(birth, card, birth));
    }

    /// current_period is in 1..=7 for any pair of dates, either order
    #[test]
    fn prop_current_period_in_range(birth in date_strategy(), target in date_strategy()) {
        let period = current_period(birth, target);
        prop_assert!((1..=7).contains(&period));
    }
}

// =============================================================================
// Spread Engine
// =============================================================================

proptest! {
    /// cycled(n) is the same as cycling n times by hand
    #[test]
    fn prop_cycled_matches_manual(cycles in 0usize..400) {
        let mut manual = Spread::new();
        for _ in 0..cycles {
            manual.cycle();
        }
        prop_assert_eq!(Spread::cycled(cycles), manual);
    }

    /// Every spread is a rearrangement of the whole deck
    #[test]
    fn prop_spread_is_permutation(cycles in 0usize..10_000) {
        let spread = Spread::cycled(cycles);
        let mut cards = spread.current()[1..].to_vec();
        cards.sort_unstable();
        prop_assert_eq!(cards, (1..=52).collect::<Vec<u8>>());
    }
}
