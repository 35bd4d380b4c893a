//! Searches over a sorted hand for same-rank groups and consecutive runs.
//!
//! Every finder expects the hand sorted ascending by rank, as left by
//! [`crate::sort_hand`].

use crate::card::Card;

fn rank_chunks(hand: &[Card]) -> impl Iterator<Item = &[Card]> {
    debug_assert!(
        hand.windows(2).all(|pair| pair[0].rank <= pair[1].rank),
        "hand must be sorted by rank"
    );
    hand.chunk_by(|a, b| a.same_rank(b))
}

/// One group of exactly `n` same-rank cards for every rank holding at least
/// `n` cards. A rank with more than `n` cards still yields a single group.
///
/// # Panics
///
/// If `n` is zero.
pub fn rank_groups(hand: &[Card], n: usize) -> Vec<Vec<Card>> {
    assert!(n > 0, "group size must be positive");
    rank_chunks(hand)
        .filter(|chunk| chunk.len() >= n)
        .map(|chunk| chunk[..n].to_vec())
        .collect()
}

/// Runs of `length` consecutive ranks, `multiplicity` cards per rank.
///
/// Each distinct rank is tried as a start; overlapping runs are all
/// returned. Twos and jokers end the search.
///
/// # Panics
///
/// If `multiplicity` or `length` is zero.
pub fn runs(hand: &[Card], multiplicity: usize, length: usize) -> Vec<Vec<Card>> {
    assert!(multiplicity > 0, "run multiplicity must be positive");
    assert!(length > 0, "run length must be positive");
    let chunks: Vec<&[Card]> = rank_chunks(hand).collect();
    let mut found = Vec::new();
    for (start, first) in chunks.iter().enumerate() {
        if !first[0].rank.is_straightable() {
            break;
        }
        if let Some(run) = run_from(&chunks[start..], multiplicity, length) {
            found.push(run);
        }
    }
    found
}

fn run_from(chunks: &[&[Card]], multiplicity: usize, length: usize) -> Option<Vec<Card>> {
    if chunks.len() < length {
        return None;
    }
    let mut run = Vec::with_capacity(multiplicity * length);
    for (step, chunk) in chunks[..length].iter().enumerate() {
        if !chunk[0].rank.is_straightable() || chunk.len() < multiplicity {
            return None;
        }
        if step > 0 && !chunk[0].is_successor_of(&chunks[step - 1][0]) {
            return None;
        }
        run.extend_from_slice(&chunk[..multiplicity]);
    }
    Some(run)
}

/// Both jokers when they are the two highest cards of the hand.
///
/// # Panics
///
/// If the hand holds fewer than two cards.
pub fn rocket(hand: &[Card]) -> Option<Vec<Card>> {
    assert!(hand.len() >= 2, "rocket needs at least two cards to inspect");
    let top = &hand[hand.len() - 2..];
    (top[0] == Card::BLACK_JOKER && top[1] == Card::RED_JOKER).then(|| top.to_vec())
}
