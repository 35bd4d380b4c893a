use crate::card::Card;
use crate::deck::deal;
use crate::error::GameError;
use crate::hand::{remove, sort_hand};
use crate::kind::PlayKind;
use crate::moves::{enumerate, filter};
use crate::play::Play;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

pub const PLAYERS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub play: Play,
    pub next_turn: usize,
    pub winner: Option<usize>,
}

/// Three hands and the state of the current trick.
///
/// Hands stay sorted for the whole game. The landlord holds the three bottom
/// cards and leads the first trick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    hands: [Vec<Card>; PLAYERS],
    bottom: Vec<Card>,
    landlord: usize,
    turn: usize,
    last_play: Play,
    last_player: Option<usize>,
    pass_count: u8,
    winner: Option<usize>,
}

impl Table {
    /// Deals from `seed`. Without an explicit `landlord` one is drawn from a
    /// second stream derived from the same seed.
    pub fn new(seed: u64, landlord: Option<usize>) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let dealt = deal(&mut rng);
        let landlord = landlord.unwrap_or_else(|| {
            let mut pick = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
            (pick.next_u64() % PLAYERS as u64) as usize
        });
        let mut hands = dealt.hands;
        assert!(landlord < PLAYERS, "landlord seat {landlord} out of range");
        hands[landlord].extend(dealt.bottom.iter().copied());
        info!(seed, landlord, "dealt new game");
        Table::with_bottom(hands, dealt.bottom, landlord)
    }

    /// A table over hands chosen by the caller; the landlord leads.
    pub fn from_hands(hands: [Vec<Card>; PLAYERS], landlord: usize) -> Self {
        assert!(landlord < PLAYERS, "landlord seat {landlord} out of range");
        Table::with_bottom(hands, Vec::new(), landlord)
    }

    fn with_bottom(mut hands: [Vec<Card>; PLAYERS], bottom: Vec<Card>, landlord: usize) -> Self {
        for hand in hands.iter_mut() {
            sort_hand(hand);
        }
        Table {
            hands,
            bottom,
            landlord,
            turn: landlord,
            last_play: Play::lead(),
            last_player: None,
            pass_count: 0,
            winner: None,
        }
    }

    pub fn hand(&self, player: usize) -> &[Card] {
        &self.hands[player]
    }

    /// The landlord's extra cards, shown to everyone.
    pub fn bottom(&self) -> &[Card] {
        &self.bottom
    }

    pub fn landlord(&self) -> usize {
        self.landlord
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn last_play(&self) -> &Play {
        &self.last_play
    }

    pub fn last_player(&self) -> Option<usize> {
        self.last_player
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn is_leading(&self) -> bool {
        self.last_player.is_none()
    }

    /// The kind the current player has to follow.
    pub fn required(&self) -> PlayKind {
        self.last_play.kind()
    }

    /// Plays open to the current player, lowest first within each shape.
    pub fn options(&mut self) -> Vec<Play> {
        if self.winner.is_some() {
            return Vec::new();
        }
        let required = self.required();
        let candidates = enumerate(&mut self.hands[self.turn], &required);
        filter(candidates, &self.last_play)
    }

    pub fn play(&mut self, player: usize, play: &Play) -> Result<PlayOutcome, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        if player != self.turn {
            return Err(GameError::NotYourTurn);
        }
        let cards: Vec<Card> = play.cards().copied().collect();
        if Play::classify(&cards).map(|found| found.kind()) != Some(play.kind()) {
            return Err(GameError::InvalidPlay);
        }
        if !play.beats(&self.last_play) {
            return Err(GameError::MustBeatPrevious);
        }
        remove(play, &mut self.hands[player])?;
        info!(player, play = %play, left = self.hands[player].len(), "play accepted");

        self.last_play = play.clone();
        self.last_player = Some(player);
        self.pass_count = 0;
        let next_turn = (player + 1) % PLAYERS;
        self.turn = next_turn;
        if self.hands[player].is_empty() {
            info!(player, landlord = player == self.landlord, "player went out");
            self.winner = Some(player);
        }
        Ok(PlayOutcome {
            play: play.clone(),
            next_turn,
            winner: self.winner,
        })
    }

    /// Plays the given cards if they form a shape.
    pub fn play_cards(&mut self, player: usize, cards: &[Card]) -> Result<PlayOutcome, GameError> {
        let play = Play::classify(cards).ok_or(GameError::InvalidPlay)?;
        self.play(player, &play)
    }

    /// Passes the turn. Two passes in a row end the trick and hand the lead
    /// back to whoever played last.
    pub fn pass(&mut self, player: usize) -> Result<usize, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        if player != self.turn {
            return Err(GameError::NotYourTurn);
        }
        if self.is_leading() || self.last_player == Some(player) {
            return Err(GameError::CannotPass);
        }
        debug!(player, "pass");
        self.pass_count = self.pass_count.saturating_add(1);
        if self.pass_count >= 2 {
            debug!(leader = ?self.last_player, "trick closed");
            self.last_play = Play::lead();
            self.last_player = None;
            self.pass_count = 0;
        }
        self.turn = (self.turn + 1) % PLAYERS;
        Ok(self.turn)
    }
}
