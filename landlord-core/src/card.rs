use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    Joker,
}

impl Suit {
    /// Suit order used when a card is built from its deck index.
    const BY_INDEX: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub(crate) fn order(&self) -> u8 {
        match self {
            Suit::Clubs => 1,
            Suit::Diamonds => 2,
            Suit::Hearts => 3,
            Suit::Spades => 4,
            Suit::Joker => 5,
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    fn to_char(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Joker => 'J',
        }
    }
}

/// Card rank in play order. Ace and two sit above king, the jokers above
/// everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Rank {
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
    Two = 15,
    BlackJoker = 16,
    RedJoker = 17,
}

impl Rank {
    pub const ALL: [Rank; 15] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::BlackJoker,
        Rank::RedJoker,
    ];

    fn position(self) -> usize {
        self as usize - Rank::Three as usize
    }

    /// Rank for a face number where 1 is the ace and 13 the king.
    fn from_number(number: u8) -> Rank {
        match number {
            1 => Rank::Ace,
            2 => Rank::Two,
            3..=13 => Rank::ALL[usize::from(number) - 3],
            _ => panic!("face number {number} out of range 1..=13"),
        }
    }

    fn number(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::BlackJoker | Rank::RedJoker => {
                panic!("jokers have no face number")
            }
            other => other as u8,
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "BJ" => Some(Rank::BlackJoker),
            "RJ" => Some(Rank::RedJoker),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::BlackJoker => "BJ",
            Rank::RedJoker => "RJ",
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    /// Twos and jokers never take part in a run.
    pub fn is_straightable(&self) -> bool {
        !matches!(self, Rank::Two | Rank::BlackJoker | Rank::RedJoker)
    }

    /// The next lower rank in play order.
    ///
    /// # Panics
    ///
    /// Three is the lowest rank and has no predecessor.
    pub fn pred(self) -> Rank {
        let position = self.position();
        assert!(position > 0, "rank 3 has no predecessor");
        Rank::ALL[position - 1]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A physical card.
///
/// The derived equality is identity: rank and suit both match. Game rules
/// compare cards by rank alone through [`Card::same_rank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

#[derive(Deserialize)]
struct RawCard {
    rank: Rank,
    suit: Suit,
}

impl TryFrom<RawCard> for Card {
    type Error = String;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        if raw.rank.is_joker() != (raw.suit == Suit::Joker) {
            return Err(format!("no such card: {} of {:?}", raw.rank, raw.suit));
        }
        Ok(Card {
            rank: raw.rank,
            suit: raw.suit,
        })
    }
}

impl Card {
    pub const BLACK_JOKER: Card = Card {
        rank: Rank::BlackJoker,
        suit: Suit::Joker,
    };
    pub const RED_JOKER: Card = Card {
        rank: Rank::RedJoker,
        suit: Suit::Joker,
    };

    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Builds the card with deck index `index`: 13 cards per suit in the
    /// order spades, hearts, diamonds, clubs (ace first), then the black and
    /// red joker at 52 and 53.
    ///
    /// # Panics
    ///
    /// If `index` is 54 or more.
    pub fn from_index(index: u8) -> Self {
        assert!(index < 54, "card index {index} out of bound");
        match index {
            52 => Card::BLACK_JOKER,
            53 => Card::RED_JOKER,
            _ => Card {
                rank: Rank::from_number(index % 13 + 1),
                suit: Suit::BY_INDEX[usize::from(index / 13)],
            },
        }
    }

    pub fn index(&self) -> u8 {
        match self.rank {
            Rank::BlackJoker => 52,
            Rank::RedJoker => 53,
            rank => {
                let suit = Suit::BY_INDEX
                    .iter()
                    .position(|suit| *suit == self.suit)
                    .expect("non-joker card carries a joker suit");
                suit as u8 * 13 + rank.number() - 1
            }
        }
    }

    pub fn same_rank(&self, other: &Card) -> bool {
        self.rank == other.rank
    }

    /// Same suit, one rank lower.
    ///
    /// # Panics
    ///
    /// On a three.
    pub fn pred(&self) -> Card {
        Card {
            rank: self.rank.pred(),
            suit: self.suit,
        }
    }

    /// True when `self` is the next card above `other` inside a run.
    pub fn is_successor_of(&self, other: &Card) -> bool {
        self.rank.is_straightable() && self.rank != Rank::Three && self.pred().same_rank(other)
    }

    pub fn code(&self) -> String {
        if self.rank.is_joker() {
            return self.rank.to_str().to_string();
        }
        format!("{}{}", self.suit.to_char(), self.rank.to_str())
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == "BJ" {
            return Some(Card::BLACK_JOKER);
        }
        if code == "RJ" {
            return Some(Card::RED_JOKER);
        }
        let mut chars = code.chars();
        let suit = Suit::from_char(chars.next()?)?;
        let rank = Rank::from_str(chars.as_str())?;
        if rank.is_joker() {
            return None;
        }
        Some(Card { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
