use crate::card::{Card, Rank};
use crate::hand::sort_hand;
use crate::kind::{
    PlayKind, AIRPLANE_PAIRS_LENGTHS, AIRPLANE_SINGLES_LENGTHS, DOUBLE_STRAIGHT_LENGTHS,
    STRAIGHT_LENGTHS, TRIPLE_STRAIGHT_LENGTHS,
};
use serde::Serialize;
use std::fmt;

/// Outcome of ranking one play against another.
///
/// Plays of different shapes are usually not ranked at all, so this is a
/// partial order and `Incomparable` is a real answer rather than "lower".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    Incomparable,
}

/// A concrete combination of cards: a base group plus, for the compound
/// shapes, an attachment that shares no rank with the base.
///
/// `base` is kept in hand order, so `base[0]` is its lowest card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Play {
    kind: PlayKind,
    base: Vec<Card>,
    attachment: Vec<Card>,
}

impl Play {
    /// A play without attachment.
    ///
    /// # Panics
    ///
    /// If `kind` is a compound shape or the card count does not fit `kind`.
    pub fn new(kind: PlayKind, base: Vec<Card>) -> Self {
        assert!(!kind.has_attachment(), "{kind} needs an attachment");
        Play::build(kind, base, Vec::new())
    }

    /// A compound play.
    ///
    /// # Panics
    ///
    /// If `kind` takes no attachment, the card counts do not fit `kind`, or
    /// an attachment card shares a rank with any base card.
    pub fn with_attachment(kind: PlayKind, base: Vec<Card>, attachment: Vec<Card>) -> Self {
        assert!(kind.has_attachment(), "{kind} takes no attachment");
        if let Some(clash) = attachment
            .iter()
            .find(|extra| base.iter().any(|card| card.same_rank(extra)))
        {
            panic!("attachment card {clash} shares its rank with the base");
        }
        Play::build(kind, base, attachment)
    }

    fn build(kind: PlayKind, base: Vec<Card>, attachment: Vec<Card>) -> Self {
        assert!(kind.is_concrete(), "{kind} is not a playable shape");
        assert!(kind.has_valid_length(), "{kind} has a run length outside its range");
        assert_eq!(
            attachment.len(),
            kind.attachment_groups() * kind.attachment_width(),
            "wrong attachment size for {kind}"
        );
        assert_eq!(
            Some(base.len() + attachment.len()),
            kind.card_count(),
            "wrong card count for {kind}"
        );
        let cards: Vec<Card> = base.iter().chain(attachment.iter()).copied().collect();
        assert!(
            shape(&cards).is_some_and(|(found, _, _)| found == kind),
            "cards do not form a {kind}"
        );
        Play {
            kind,
            base,
            attachment,
        }
    }

    /// Placeholder last play at the start of a trick. Every concrete play
    /// beats it.
    pub fn lead() -> Self {
        Play {
            kind: PlayKind::Lead,
            base: Vec::new(),
            attachment: Vec::new(),
        }
    }

    pub fn kind(&self) -> PlayKind {
        self.kind
    }

    pub fn base(&self) -> &[Card] {
        &self.base
    }

    pub fn attachment(&self) -> &[Card] {
        &self.attachment
    }

    /// Base cards first, then the attachment.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.base.iter().chain(self.attachment.iter())
    }

    pub fn len(&self) -> usize {
        self.base.len() + self.attachment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rank of the lowest base card; `None` for the lead placeholder.
    pub fn main_rank(&self) -> Option<Rank> {
        self.base.first().map(|card| card.rank)
    }

    pub fn compare(&self, other: &Play) -> Comparison {
        if self.kind == other.kind {
            return match self.kind {
                PlayKind::Rocket => Comparison::Equal,
                PlayKind::Lead | PlayKind::Exhausted => Comparison::Incomparable,
                _ => match self.main_rank().cmp(&other.main_rank()) {
                    std::cmp::Ordering::Less => Comparison::Less,
                    std::cmp::Ordering::Equal => Comparison::Equal,
                    std::cmp::Ordering::Greater => Comparison::Greater,
                },
            };
        }
        if self.kind.is_beaten_by(&other.kind) {
            Comparison::Less
        } else if other.kind.is_beaten_by(&self.kind) {
            Comparison::Greater
        } else {
            Comparison::Incomparable
        }
    }

    /// True when this play may legally follow `last`.
    pub fn beats(&self, last: &Play) -> bool {
        self.compare(last) == Comparison::Greater
    }

    /// Recognizes `cards` as one of the playable shapes.
    pub fn classify(cards: &[Card]) -> Option<Play> {
        shape(cards).map(|(kind, base, attachment)| Play {
            kind,
            base,
            attachment,
        })
    }
}

/// Shape of `cards` with its base and attachment split apart, both sorted.
fn shape(cards: &[Card]) -> Option<(PlayKind, Vec<Card>, Vec<Card>)> {
    if cards.is_empty() {
        return None;
    }
    let mut sorted = cards.to_vec();
    sort_hand(&mut sorted);
    let groups: Vec<&[Card]> = sorted.chunk_by(|a, b| a.same_rank(b)).collect();
    let len = sorted.len();

    if len == 2 && sorted[0] == Card::BLACK_JOKER && sorted[1] == Card::RED_JOKER {
        return Some((PlayKind::Rocket, sorted, Vec::new()));
    }

    if groups.len() == 1 {
        let kind = match len {
            1 => PlayKind::Single,
            2 => PlayKind::Pair,
            3 => PlayKind::Triple,
            4 => PlayKind::Bomb,
            _ => return None,
        };
        return Some((kind, sorted, Vec::new()));
    }

    let widths: Vec<usize> = groups.iter().map(|group| group.len()).collect();

    if widths.iter().all(|w| *w == widths[0]) && is_run(&groups) {
        let kind = match widths[0] {
            1 if STRAIGHT_LENGTHS.contains(&groups.len()) => {
                PlayKind::straight(groups.len())
            }
            2 if DOUBLE_STRAIGHT_LENGTHS.contains(&groups.len()) => {
                PlayKind::double_straight(groups.len())
            }
            3 if TRIPLE_STRAIGHT_LENGTHS.contains(&groups.len()) => {
                PlayKind::triple_straight(groups.len())
            }
            _ => return None,
        };
        return Some((kind, sorted, Vec::new()));
    }

    let (heads, wings): (Vec<&[Card]>, Vec<&[Card]>) = match widths.iter().max() {
        Some(4) => groups.iter().copied().partition(|group| group.len() == 4),
        Some(3) => groups.iter().copied().partition(|group| group.len() == 3),
        _ => return None,
    };
    if wings.is_empty() {
        return None;
    }
    let wing_width = wings[0].len();
    if wings.iter().any(|wing| wing.len() != wing_width) {
        return None;
    }
    let head_width = heads[0].len();
    let kind = match (head_width, heads.len(), wing_width, wings.len()) {
        (3, 1, 1, 1) => PlayKind::TripleSingle,
        (3, 1, 2, 1) => PlayKind::TriplePair,
        (4, 1, 1, 2) => PlayKind::FourTwoSingle,
        (4, 1, 2, 2) => PlayKind::FourTwoPair,
        (3, n, 1, m)
            if n == m && AIRPLANE_SINGLES_LENGTHS.contains(&n) && is_run(&heads) =>
        {
            PlayKind::airplane_singles(n)
        }
        (3, n, 2, m)
            if n == m && AIRPLANE_PAIRS_LENGTHS.contains(&n) && is_run(&heads) =>
        {
            PlayKind::airplane_pairs(n)
        }
        _ => return None,
    };
    Some((kind, heads.concat(), wings.concat()))
}

/// Consecutive straightable ranks, lowest first.
fn is_run(groups: &[&[Card]]) -> bool {
    groups.iter().all(|group| group[0].rank.is_straightable())
        && groups
            .windows(2)
            .all(|pair| pair[1][0].is_successor_of(&pair[0][0]))
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind)?;
        for card in self.base.iter() {
            write!(f, " {card}")?;
        }
        if !self.attachment.is_empty() {
            write!(f, " +")?;
            for card in self.attachment.iter() {
                write!(f, " {card}")?;
            }
        }
        Ok(())
    }
}
