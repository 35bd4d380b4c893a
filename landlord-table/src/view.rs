use landlord_core::{Card, Play, Table, PLAYERS};
use serde::{Deserialize, Serialize};

/// One line of `--json` output.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TableEvent {
    Turn(TableSnapshot),
    Played { seat: usize, play: PlayView },
    Passed { seat: usize },
    Rejected { reason: String },
    GameOver { winner: usize, landlord_won: bool },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub seat: usize,
    pub name: String,
    pub hand_count: usize,
    pub is_landlord: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayView {
    pub kind: String,
    pub main_rank: Option<String>,
    pub cards: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub seed: u64,
    pub players: Vec<PlayerInfo>,
    pub bottom: Vec<String>,
    pub turn: usize,
    pub last_player: Option<usize>,
    pub last_play: Option<PlayView>,
    pub your_hand: Vec<String>,
    /// Numbered choices for the seat to move.
    pub options: Vec<PlayView>,
    pub winner: Option<usize>,
}

pub fn play_to_view(play: &Play) -> PlayView {
    PlayView {
        kind: play.kind().to_string(),
        main_rank: play.main_rank().map(|rank| rank.to_str().to_string()),
        cards: codes(play.cards()),
    }
}

pub fn codes<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<String> {
    cards.into_iter().map(|card| card.code()).collect()
}

pub fn snapshot(table: &Table, seed: u64, options: &[Play]) -> TableSnapshot {
    let players = (0..PLAYERS)
        .map(|seat| PlayerInfo {
            seat,
            name: seat_name(seat, table.landlord()),
            hand_count: table.hand(seat).len(),
            is_landlord: seat == table.landlord(),
        })
        .collect();
    let last_play = table.last_player().map(|_| play_to_view(table.last_play()));
    TableSnapshot {
        seed,
        players,
        bottom: codes(table.bottom()),
        turn: table.turn(),
        last_player: table.last_player(),
        last_play,
        your_hand: codes(table.hand(table.turn())),
        options: options.iter().map(play_to_view).collect(),
        winner: table.winner(),
    }
}

pub fn seat_name(seat: usize, landlord: usize) -> String {
    if seat == landlord {
        return format!("Landlord (seat {seat})");
    }
    format!("Farmer (seat {seat})")
}

/// Plain-text rendering of a snapshot for the console.
pub fn render_text(snapshot: &TableSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("--- {} to play ---\n", snapshot.players[snapshot.turn].name));
    for player in snapshot.players.iter() {
        out.push_str(&format!("  {}: {} cards\n", player.name, player.hand_count));
    }
    match (&snapshot.last_play, snapshot.last_player) {
        (Some(play), Some(seat)) => out.push_str(&format!(
            "last play by seat {seat}: {} [{}]\n",
            play.kind,
            play.cards.join(" ")
        )),
        _ => out.push_str("you lead\n"),
    }
    out.push_str(&format!("hand: {}\n", snapshot.your_hand.join(" ")));
    for (idx, option) in snapshot.options.iter().enumerate() {
        out.push_str(&format!("  [{idx}] {}: {}\n", option.kind, option.cards.join(" ")));
    }
    if snapshot.options.is_empty() {
        out.push_str("  nothing beats it, pass with 'p'\n");
    }
    out
}
