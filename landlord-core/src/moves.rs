//! Legal move enumeration and the beat filter.

use crate::card::Card;
use crate::combos::plays_of_kind;
use crate::hand::sort_hand;
use crate::kind::PlayKind;
use crate::play::Play;
use tracing::debug;

/// Every play the sorted hand supports among the successors of `required`.
///
/// Plays are grouped by kind in the order of [`PlayKind::successors`] and,
/// within a kind, by ascending base rank.
pub fn legal_plays(sorted_hand: &[Card], required: &PlayKind) -> Vec<Play> {
    debug_assert!(
        sorted_hand
            .windows(2)
            .all(|pair| pair[0].rank <= pair[1].rank),
        "hand must be sorted by rank"
    );
    let plays: Vec<Play> = required
        .successors()
        .into_iter()
        .flat_map(|kind| plays_of_kind(sorted_hand, kind))
        .collect();
    debug!(
        %required,
        hand = sorted_hand.len(),
        candidates = plays.len(),
        "enumerated plays"
    );
    plays
}

/// Sorts `hand` in place, then returns [`legal_plays`] for it.
///
/// Afterwards `hand` is ascending by rank, ties by suit. Enumerating an
/// already sorted hand leaves it as it was.
pub fn enumerate(hand: &mut [Card], required: &PlayKind) -> Vec<Play> {
    sort_hand(hand);
    legal_plays(hand, required)
}

/// Keeps the candidates that beat `last_play`. Against the lead placeholder
/// everything passes.
pub fn filter(candidates: Vec<Play>, last_play: &Play) -> Vec<Play> {
    if last_play.kind() == PlayKind::Lead {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|play| play.beats(last_play))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::test_gens;
    use proptest::prelude::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    fn hand_of(ranks: &[Rank]) -> Vec<Card> {
        let suits = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
        ranks
            .iter()
            .enumerate()
            .map(|(i, rank)| {
                if rank.is_joker() {
                    return card(*rank, Suit::Joker);
                }
                let seen = ranks[..i].iter().filter(|r| *r == rank).count();
                card(*rank, suits[seen])
            })
            .collect()
    }

    fn of_kind(plays: &[Play], kind: PlayKind) -> Vec<&Play> {
        plays.iter().filter(|p| p.kind() == kind).collect()
    }

    fn pair(rank: Rank) -> Play {
        Play::new(
            PlayKind::Pair,
            vec![card(rank, Suit::Spades), card(rank, Suit::Hearts)],
        )
    }

    #[test]
    fn leading_with_a_small_triple_hand() {
        use Rank::*;
        let mut hand = hand_of(&[Five, Three, Four, Three, Three]);
        let plays = enumerate(&mut hand, &PlayKind::Lead);

        let singles: Vec<Option<Rank>> = of_kind(&plays, PlayKind::Single)
            .iter()
            .map(|p| p.main_rank())
            .collect();
        assert_eq!(singles, vec![Some(Three), Some(Four), Some(Five)]);

        let pairs = of_kind(&plays, PlayKind::Pair);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].main_rank(), Some(Three));

        let triples = of_kind(&plays, PlayKind::Triple);
        assert_eq!(triples.len(), 1);

        let with_single = of_kind(&plays, PlayKind::TripleSingle);
        let wings: Vec<Rank> = with_single.iter().map(|p| p.attachment()[0].rank).collect();
        assert_eq!(wings, vec![Four, Five]);

        assert!(plays
            .iter()
            .all(|p| !matches!(p.kind(), PlayKind::Straight(_))));
        assert_eq!(plays.len(), 7);
    }

    #[test]
    fn enumerate_sorts_the_hand() {
        use Rank::*;
        let mut hand = hand_of(&[Two, Three, RedJoker, Ten]);
        enumerate(&mut hand, &PlayKind::Single);
        let ranks: Vec<Rank> = hand.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Three, Ten, Two, RedJoker]);
    }

    #[test]
    fn following_a_shape_offers_that_shape_and_bombs() {
        use Rank::*;
        let mut hand = hand_of(&[
            Four, Four, Six, Six, Six, Nine, Nine, Nine, Nine, BlackJoker, RedJoker,
        ]);
        let plays = enumerate(&mut hand, &PlayKind::Pair);
        let kinds: Vec<PlayKind> = plays.iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                PlayKind::Pair,
                PlayKind::Pair,
                PlayKind::Pair,
                PlayKind::Bomb,
                PlayKind::Rocket
            ]
        );
    }

    #[test]
    fn rocket_found_for_any_required_kind() {
        use Rank::*;
        let mut hand = hand_of(&[Three, Seven, Seven, BlackJoker, RedJoker]);
        for required in [
            PlayKind::Lead,
            PlayKind::Single,
            PlayKind::straight(5),
            PlayKind::Bomb,
        ] {
            let plays = enumerate(&mut hand, &required);
            assert_eq!(of_kind(&plays, PlayKind::Rocket).len(), 1, "{required}");
        }
        assert!(enumerate(&mut hand, &PlayKind::Rocket).is_empty());
    }

    #[test]
    fn rocket_survives_filter_except_against_rocket() {
        use Rank::*;
        let mut hand = hand_of(&[Three, BlackJoker, RedJoker]);
        let plays = enumerate(&mut hand, &PlayKind::Lead);
        let rocket = of_kind(&plays, PlayKind::Rocket)[0].clone();

        let bomb = Play::new(PlayKind::Bomb, hand_of(&[Two, Two, Two, Two]));
        assert_eq!(filter(vec![rocket.clone()], &bomb), vec![rocket.clone()]);
        assert_eq!(filter(vec![rocket.clone()], &pair(Ace)), vec![rocket.clone()]);
        assert!(filter(vec![rocket.clone()], &rocket).is_empty());
    }

    #[test]
    fn filter_keeps_higher_pair_and_bomb() {
        use Rank::*;
        let triple = Play::new(PlayKind::Triple, hand_of(&[Two, Two, Two]));
        let bomb = Play::new(PlayKind::Bomb, hand_of(&[Nine, Nine, Nine, Nine]));
        let kept = filter(vec![pair(Seven), triple, bomb.clone()], &pair(Five));
        assert_eq!(kept, vec![pair(Seven), bomb]);
    }

    #[test]
    fn filter_drops_lower_and_equal_plays() {
        use Rank::*;
        let kept = filter(vec![pair(Three), pair(Five), pair(Six)], &pair(Five));
        assert_eq!(kept, vec![pair(Six)]);
    }

    #[test]
    fn lead_lets_everything_through() {
        use Rank::*;
        let candidates = vec![pair(Three), pair(Two)];
        assert_eq!(filter(candidates.clone(), &Play::lead()), candidates);
    }

    #[test]
    fn single_card_hand_can_still_lead() {
        let mut hand = vec![Card::RED_JOKER];
        let plays = enumerate(&mut hand, &PlayKind::Lead);
        assert_eq!(plays.len(), 1);
        assert_eq!(plays[0].kind(), PlayKind::Single);
        assert!(enumerate(&mut Vec::<Card>::new(), &PlayKind::Lead).is_empty());
    }

    proptest! {
        #[test]
        fn prop_enumerate_is_idempotent_on_sorted_hands(
            hand in test_gens::sorted_hand(17),
            required in test_gens::required_kind(),
        ) {
            let mut again = hand.clone();
            let plays = enumerate(&mut again, &required);
            prop_assert_eq!(&again, &hand);
            prop_assert_eq!(plays, legal_plays(&hand, &required));
        }

        #[test]
        fn prop_compound_plays_keep_base_and_attachment_apart(
            hand in test_gens::sorted_hand(20),
        ) {
            for play in legal_plays(&hand, &PlayKind::Lead) {
                let kind = play.kind();
                prop_assert_eq!(
                    play.attachment().len(),
                    kind.attachment_groups() * kind.attachment_width()
                );
                for extra in play.attachment() {
                    prop_assert!(play.base().iter().all(|c| !c.same_rank(extra)));
                }
                prop_assert!(play.cards().all(|c| hand.contains(c)));
            }
        }

        #[test]
        fn prop_enumerated_plays_classify_as_themselves(
            hand in test_gens::sorted_hand(20),
        ) {
            for play in legal_plays(&hand, &PlayKind::Lead) {
                let cards: Vec<Card> = play.cards().copied().collect();
                prop_assert_eq!(Play::classify(&cards), Some(play));
            }
        }

        #[test]
        fn prop_filtered_plays_beat_the_last_play(
            hand in test_gens::sorted_hand(12),
            other in test_gens::sorted_hand(12),
        ) {
            for last in legal_plays(&other, &PlayKind::Lead) {
                let candidates = legal_plays(&hand, &last.kind());
                for play in filter(candidates, &last) {
                    prop_assert!(play.beats(&last));
                    prop_assert!(
                        play.kind() == last.kind()
                            || matches!(play.kind(), PlayKind::Bomb | PlayKind::Rocket)
                    );
                }
            }
        }
    }
}
