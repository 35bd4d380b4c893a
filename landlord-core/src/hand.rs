use crate::card::Card;
use crate::error::GameError;
use crate::play::Play;
use std::collections::HashMap;

/// Sorts ascending by rank, breaking ties by suit so the order is stable
/// across calls.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort_by_key(|card| (card.rank, card.suit.order()))
}

/// Takes the cards of `play` out of `hand`, base first, then attachment.
///
/// Cards are matched by identity, so of two same-rank cards only the one
/// with the requested suit goes. If any card of the play is missing the hand
/// is left untouched.
pub fn remove(play: &Play, hand: &mut Vec<Card>) -> Result<(), GameError> {
    let mut needed = HashMap::new();
    for card in play.cards() {
        *needed.entry(*card).or_insert(0usize) += 1;
    }
    for (card, count) in needed.iter() {
        let owned = hand.iter().filter(|c| *c == card).count();
        if owned < *count {
            return Err(GameError::CardsNotOwned);
        }
    }
    for card in play.cards() {
        if let Some(pos) = hand.iter().position(|c| c == card) {
            hand.remove(pos);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::kind::PlayKind;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    #[test]
    fn sort_orders_by_rank_then_suit() {
        let mut hand = vec![
            Card::RED_JOKER,
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
        ];
        sort_hand(&mut hand);
        assert_eq!(
            hand,
            vec![
                card(Rank::Three, Suit::Clubs),
                card(Rank::Three, Suit::Spades),
                card(Rank::Ace, Suit::Hearts),
                card(Rank::Two, Suit::Spades),
                Card::RED_JOKER,
            ]
        );
    }

    #[test]
    fn remove_takes_the_exact_suit() {
        let mut hand = vec![
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
        ];
        let play = Play::new(PlayKind::Single, vec![card(Rank::Seven, Suit::Hearts)]);
        remove(&play, &mut hand).unwrap();
        assert_eq!(
            hand,
            vec![
                card(Rank::Seven, Suit::Clubs),
                card(Rank::Nine, Suit::Spades)
            ]
        );
    }

    #[test]
    fn remove_takes_base_and_attachment() {
        let mut hand = vec![
            card(Rank::Five, Suit::Clubs),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Five, Suit::Hearts),
            card(Rank::Five, Suit::Spades),
            card(Rank::Eight, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
        ];
        let play = Play::with_attachment(
            PlayKind::TripleSingle,
            hand[1..4].to_vec(),
            vec![card(Rank::King, Suit::Clubs)],
        );
        remove(&play, &mut hand).unwrap();
        assert_eq!(
            hand,
            vec![
                card(Rank::Five, Suit::Clubs),
                card(Rank::Eight, Suit::Clubs)
            ]
        );
    }

    #[test]
    fn remove_missing_card_leaves_hand_alone() {
        let mut hand = vec![card(Rank::Seven, Suit::Clubs), card(Rank::Seven, Suit::Hearts)];
        let play = Play::new(
            PlayKind::Pair,
            vec![card(Rank::Seven, Suit::Clubs), card(Rank::Seven, Suit::Spades)],
        );
        let before = hand.clone();
        assert_eq!(remove(&play, &mut hand), Err(GameError::CardsNotOwned));
        assert_eq!(hand, before);
    }
}
