//! Builds every concrete play of a given kind out of a sorted hand.

use crate::card::Card;
use crate::groups::{rank_groups, rocket, runs};
use crate::kind::PlayKind;
use crate::play::Play;

/// Pairs each base group with every choice of `count` wing groups.
///
/// Wings are taken as combinations of distinct positions in `wings`, so the
/// same set of wings is never produced twice. A pairing is skipped when any
/// wing shares a rank with any card of its base.
pub fn attach(
    bases: &[Vec<Card>],
    wings: &[Vec<Card>],
    count: usize,
) -> Vec<(Vec<Card>, Vec<Card>)> {
    let choices = combinations(wings.len(), count);
    let mut built = Vec::new();
    for base in bases.iter() {
        for choice in choices.iter() {
            let clashes = choice.iter().any(|&idx| {
                wings[idx]
                    .iter()
                    .any(|wing| base.iter().any(|card| card.same_rank(wing)))
            });
            if clashes {
                continue;
            }
            let extra = choice
                .iter()
                .flat_map(|&idx| wings[idx].iter().copied())
                .collect();
            built.push((base.clone(), extra));
        }
    }
    built
}

/// All strictly increasing index lists of length `k` drawn from `0..n`.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn recurse(
        n: usize,
        k: usize,
        start: usize,
        current: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for idx in start..n {
            if n - idx < k - current.len() {
                break;
            }
            current.push(idx);
            recurse(n, k, idx + 1, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    if k <= n {
        recurse(n, k, 0, &mut Vec::with_capacity(k), &mut out);
    }
    out
}

fn plain(kind: PlayKind, groups: Vec<Vec<Card>>) -> Vec<Play> {
    groups.into_iter().map(|base| Play::new(kind, base)).collect()
}

fn compound(kind: PlayKind, bases: &[Vec<Card>], wings: &[Vec<Card>]) -> Vec<Play> {
    attach(bases, wings, kind.attachment_groups())
        .into_iter()
        .map(|(base, extra)| Play::with_attachment(kind, base, extra))
        .collect()
}

/// Every play of `kind` the sorted `hand` supports. The lead and exhausted
/// markers yield nothing.
pub fn plays_of_kind(hand: &[Card], kind: PlayKind) -> Vec<Play> {
    match kind {
        PlayKind::Single => plain(kind, rank_groups(hand, 1)),
        PlayKind::Pair => plain(kind, rank_groups(hand, 2)),
        PlayKind::Triple => plain(kind, rank_groups(hand, 3)),
        PlayKind::Bomb => plain(kind, rank_groups(hand, 4)),
        PlayKind::Straight(len) => plain(kind, runs(hand, 1, len)),
        PlayKind::DoubleStraight(len) => plain(kind, runs(hand, 2, len)),
        PlayKind::TripleStraight(len) => plain(kind, runs(hand, 3, len)),
        PlayKind::TripleSingle => compound(kind, &rank_groups(hand, 3), &rank_groups(hand, 1)),
        PlayKind::TriplePair => compound(kind, &rank_groups(hand, 3), &rank_groups(hand, 2)),
        PlayKind::FourTwoSingle => compound(kind, &rank_groups(hand, 4), &rank_groups(hand, 1)),
        PlayKind::FourTwoPair => compound(kind, &rank_groups(hand, 4), &rank_groups(hand, 2)),
        PlayKind::AirplaneSingles(len) => {
            compound(kind, &runs(hand, 3, len), &rank_groups(hand, 1))
        }
        PlayKind::AirplanePairs(len) => {
            compound(kind, &runs(hand, 3, len), &rank_groups(hand, 2))
        }
        PlayKind::Rocket => {
            if hand.len() < 2 {
                return Vec::new();
            }
            rocket(hand)
                .map(|base| vec![Play::new(kind, base)])
                .unwrap_or_default()
        }
        PlayKind::Lead | PlayKind::Exhausted => Vec::new(),
    }
}
