use crate::card::Card;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const HAND_SIZE: usize = 17;
pub const BOTTOM_SIZE: usize = 3;

/// The 54 cards in deck-index order.
pub fn standard_deck() -> Vec<Card> {
    (0..54).map(Card::from_index).collect()
}

pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = standard_deck();
    deck.shuffle(rng);
    deck
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Vec<Card>; 3],
    /// Cards set aside for the landlord.
    pub bottom: Vec<Card>,
}

/// Deals three hands round-robin from a freshly shuffled deck and keeps the
/// last three cards back.
pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Deal {
    let mut deck = shuffled_deck(rng);
    let bottom = deck.split_off(3 * HAND_SIZE);
    let mut hands: [Vec<Card>; 3] = Default::default();
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % 3].push(card);
    }
    Deal { hands, bottom }
}

pub fn seeded_deal(seed: u64) -> Deal {
    deal(&mut StdRng::seed_from_u64(seed))
}
