use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const STRAIGHT_LENGTHS: RangeInclusive<usize> = 5..=12;
pub const DOUBLE_STRAIGHT_LENGTHS: RangeInclusive<usize> = 3..=12;
pub const TRIPLE_STRAIGHT_LENGTHS: RangeInclusive<usize> = 2..=12;
pub const AIRPLANE_SINGLES_LENGTHS: RangeInclusive<usize> = 2..=5;
pub const AIRPLANE_PAIRS_LENGTHS: RangeInclusive<usize> = 2..=4;

/// Shape of a play.
///
/// Run shapes carry their length, counted in consecutive ranks. `Lead` marks
/// the start of a trick, where any shape may be played. `Exhausted` marks a
/// state where nothing further can be played.
///
/// Build run variants through the checked constructors
/// ([`PlayKind::straight`] and friends) so the length stays in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayKind {
    Lead,
    Single,
    Pair,
    Triple,
    TripleSingle,
    TriplePair,
    Straight(usize),
    DoubleStraight(usize),
    TripleStraight(usize),
    AirplaneSingles(usize),
    AirplanePairs(usize),
    FourTwoSingle,
    FourTwoPair,
    Bomb,
    Rocket,
    Exhausted,
}

fn checked(name: &str, range: RangeInclusive<usize>, len: usize) -> usize {
    assert!(
        range.contains(&len),
        "{name} length {len} outside {}..={}",
        range.start(),
        range.end()
    );
    len
}

impl PlayKind {
    pub fn straight(len: usize) -> Self {
        PlayKind::Straight(checked("straight", STRAIGHT_LENGTHS, len))
    }

    pub fn double_straight(len: usize) -> Self {
        PlayKind::DoubleStraight(checked("double straight", DOUBLE_STRAIGHT_LENGTHS, len))
    }

    pub fn triple_straight(len: usize) -> Self {
        PlayKind::TripleStraight(checked("triple straight", TRIPLE_STRAIGHT_LENGTHS, len))
    }

    pub fn airplane_singles(len: usize) -> Self {
        PlayKind::AirplaneSingles(checked("airplane", AIRPLANE_SINGLES_LENGTHS, len))
    }

    pub fn airplane_pairs(len: usize) -> Self {
        PlayKind::AirplanePairs(checked("airplane", AIRPLANE_PAIRS_LENGTHS, len))
    }

    /// Every concrete kind, run lengths expanded, in declaration order.
    pub fn all_concrete() -> Vec<PlayKind> {
        let mut kinds = vec![
            PlayKind::Single,
            PlayKind::Pair,
            PlayKind::Triple,
            PlayKind::TripleSingle,
            PlayKind::TriplePair,
        ];
        kinds.extend(STRAIGHT_LENGTHS.map(PlayKind::straight));
        kinds.extend(DOUBLE_STRAIGHT_LENGTHS.map(PlayKind::double_straight));
        kinds.extend(TRIPLE_STRAIGHT_LENGTHS.map(PlayKind::triple_straight));
        kinds.extend(AIRPLANE_SINGLES_LENGTHS.map(PlayKind::airplane_singles));
        kinds.extend(AIRPLANE_PAIRS_LENGTHS.map(PlayKind::airplane_pairs));
        kinds.extend([
            PlayKind::FourTwoSingle,
            PlayKind::FourTwoPair,
            PlayKind::Bomb,
            PlayKind::Rocket,
        ]);
        kinds
    }

    pub fn is_concrete(&self) -> bool {
        !matches!(self, PlayKind::Lead | PlayKind::Exhausted)
    }

    pub fn run_length(&self) -> Option<usize> {
        match self {
            PlayKind::Straight(len)
            | PlayKind::DoubleStraight(len)
            | PlayKind::TripleStraight(len)
            | PlayKind::AirplaneSingles(len)
            | PlayKind::AirplanePairs(len) => Some(*len),
            _ => None,
        }
    }

    /// False for a run variant built directly with a length its shape does
    /// not allow.
    pub fn has_valid_length(&self) -> bool {
        match self {
            PlayKind::Straight(len) => STRAIGHT_LENGTHS.contains(len),
            PlayKind::DoubleStraight(len) => DOUBLE_STRAIGHT_LENGTHS.contains(len),
            PlayKind::TripleStraight(len) => TRIPLE_STRAIGHT_LENGTHS.contains(len),
            PlayKind::AirplaneSingles(len) => AIRPLANE_SINGLES_LENGTHS.contains(len),
            PlayKind::AirplanePairs(len) => AIRPLANE_PAIRS_LENGTHS.contains(len),
            _ => true,
        }
    }

    /// Number of attachment groups the shape bundles with its base.
    pub fn attachment_groups(&self) -> usize {
        match self {
            PlayKind::TripleSingle | PlayKind::TriplePair => 1,
            PlayKind::FourTwoSingle | PlayKind::FourTwoPair => 2,
            PlayKind::AirplaneSingles(len) | PlayKind::AirplanePairs(len) => *len,
            _ => 0,
        }
    }

    /// Cards per attachment group.
    pub fn attachment_width(&self) -> usize {
        match self {
            PlayKind::TripleSingle | PlayKind::FourTwoSingle | PlayKind::AirplaneSingles(_) => 1,
            PlayKind::TriplePair | PlayKind::FourTwoPair | PlayKind::AirplanePairs(_) => 2,
            _ => 0,
        }
    }

    pub fn has_attachment(&self) -> bool {
        self.attachment_groups() > 0
    }

    /// Total cards in a play of this kind.
    pub fn card_count(&self) -> Option<usize> {
        let base = match self {
            PlayKind::Lead | PlayKind::Exhausted => return None,
            PlayKind::Single => 1,
            PlayKind::Pair | PlayKind::Rocket => 2,
            PlayKind::Triple | PlayKind::TripleSingle | PlayKind::TriplePair => 3,
            PlayKind::Straight(len) => *len,
            PlayKind::DoubleStraight(len) => 2 * len,
            PlayKind::TripleStraight(len)
            | PlayKind::AirplaneSingles(len)
            | PlayKind::AirplanePairs(len) => 3 * len,
            PlayKind::FourTwoSingle | PlayKind::FourTwoPair | PlayKind::Bomb => 4,
        };
        Some(base + self.attachment_groups() * self.attachment_width())
    }

    /// Whether a play of kind `other` may follow a play of this kind
    /// regardless of rank. Matching shapes are ranked against each other by
    /// [`crate::Play::compare`], not here.
    pub fn is_beaten_by(&self, other: &PlayKind) -> bool {
        match self {
            PlayKind::Lead => other.is_concrete(),
            PlayKind::Bomb => *other == PlayKind::Rocket,
            PlayKind::Rocket | PlayKind::Exhausted => false,
            _ => matches!(other, PlayKind::Bomb | PlayKind::Rocket),
        }
    }

    /// Kinds worth searching a hand for when this kind must be followed.
    ///
    /// # Panics
    ///
    /// On `Exhausted`, which never reaches active play.
    pub fn successors(&self) -> Vec<PlayKind> {
        match self {
            PlayKind::Lead => PlayKind::all_concrete(),
            PlayKind::Bomb => vec![PlayKind::Bomb, PlayKind::Rocket],
            PlayKind::Rocket => Vec::new(),
            PlayKind::Exhausted => panic!("no play can follow an exhausted trick"),
            other => vec![*other, PlayKind::Bomb, PlayKind::Rocket],
        }
    }
}

impl fmt::Display for PlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayKind::Lead => write!(f, "lead"),
            PlayKind::Single => write!(f, "single"),
            PlayKind::Pair => write!(f, "pair"),
            PlayKind::Triple => write!(f, "triple"),
            PlayKind::TripleSingle => write!(f, "triple with single"),
            PlayKind::TriplePair => write!(f, "triple with pair"),
            PlayKind::Straight(len) => write!(f, "straight x{len}"),
            PlayKind::DoubleStraight(len) => write!(f, "double straight x{len}"),
            PlayKind::TripleStraight(len) => write!(f, "triple straight x{len}"),
            PlayKind::AirplaneSingles(len) => write!(f, "airplane x{len} with singles"),
            PlayKind::AirplanePairs(len) => write!(f, "airplane x{len} with pairs"),
            PlayKind::FourTwoSingle => write!(f, "four with two singles"),
            PlayKind::FourTwoPair => write!(f, "four with two pairs"),
            PlayKind::Bomb => write!(f, "bomb"),
            PlayKind::Rocket => write!(f, "rocket"),
            PlayKind::Exhausted => write!(f, "exhausted"),
        }
    }
}
