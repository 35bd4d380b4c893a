// Proptest generators for hands drawn from the standard deck.

use proptest::prelude::*;

use crate::deck::standard_deck;
use crate::hand::sort_hand;
use crate::{Card, PlayKind};

/// Up to `max` distinct cards from one deck, in deal order.
pub fn hand(max: usize) -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(standard_deck(), 0..=max)
        .prop_shuffle()
}

/// Up to `max` distinct cards, sorted the way the finders expect.
pub fn sorted_hand(max: usize) -> impl Strategy<Value = Vec<Card>> {
    hand(max).prop_map(|mut cards| {
        sort_hand(&mut cards);
        cards
    })
}

/// Any kind a trick can be waiting on, the lead marker included.
pub fn required_kind() -> impl Strategy<Value = PlayKind> {
    let mut kinds = PlayKind::all_concrete();
    kinds.push(PlayKind::Lead);
    proptest::sample::select(kinds)
}
