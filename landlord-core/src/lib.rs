//! Dou Dizhu rules engine: card model, play shapes, legal move enumeration
//! and a three-seat turn table.

pub mod card;
pub mod combos;
pub mod deck;
pub mod error;
pub mod groups;
pub mod hand;
pub mod kind;
pub mod moves;
pub mod play;
pub mod table;

#[cfg(test)]
mod test_gens;

pub use card::{Card, Rank, Suit};
pub use deck::{deal, seeded_deal, shuffled_deck, standard_deck, Deal, BOTTOM_SIZE, HAND_SIZE};
pub use error::GameError;
pub use hand::{remove, sort_hand};
pub use kind::PlayKind;
pub use moves::{enumerate, filter, legal_plays};
pub use play::{Comparison, Play};
pub use table::{PlayOutcome, Table, PLAYERS};
