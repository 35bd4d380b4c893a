use crate::view::{snapshot, TableSnapshot};
use landlord_core::{Card, GameError, Play, PlayOutcome, Table};
use thiserror::Error;
use tracing::debug;

/// What a line of console input asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Choose(usize),
    Pass,
    Cards(Vec<Card>),
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("empty input")]
    EmptyInput,
    #[error("invalid card code {0:?}")]
    InvalidCardCode(String),
    #[error("no option numbered {0}")]
    UnknownOption(usize),
    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Played { seat: usize, outcome: PlayOutcome },
    Passed { seat: usize, next_turn: usize },
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SessionError::EmptyInput);
    }
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "p" | "pass" => return Ok(Command::Pass),
        _ => {}
    }
    if let Ok(idx) = line.parse::<usize>() {
        return Ok(Command::Choose(idx));
    }
    let cards = line
        .split_whitespace()
        .map(|code| {
            Card::from_code(&code.to_ascii_uppercase())
                .ok_or_else(|| SessionError::InvalidCardCode(code.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Command::Cards(cards))
}

/// A hot-seat game: one table, with the current seat's options numbered.
#[derive(Clone, Debug)]
pub struct Session {
    seed: u64,
    table: Table,
    options: Vec<Play>,
}

impl Session {
    pub fn new(seed: u64, landlord: Option<usize>) -> Self {
        let mut table = Table::new(seed, landlord);
        let options = table.options();
        Self {
            seed,
            table,
            options,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Options open to the seat to move, in the order they are numbered.
    pub fn options(&self) -> &[Play] {
        &self.options
    }

    pub fn is_over(&self) -> bool {
        self.table.winner().is_some()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        snapshot(&self.table, self.seed, &self.options)
    }

    /// Applies `command` for the seat to move. A rejected command leaves the
    /// table as it was.
    pub fn apply(&mut self, command: Command) -> Result<Step, SessionError> {
        let seat = self.table.turn();
        let step = match command {
            Command::Quit => return Ok(Step::Quit),
            Command::Choose(idx) => {
                let play = self
                    .options
                    .get(idx)
                    .cloned()
                    .ok_or(SessionError::UnknownOption(idx))?;
                let outcome = self.table.play(seat, &play)?;
                Step::Played { seat, outcome }
            }
            Command::Cards(cards) => {
                let outcome = self.table.play_cards(seat, &cards)?;
                Step::Played { seat, outcome }
            }
            Command::Pass => {
                let next_turn = self.table.pass(seat)?;
                Step::Passed { seat, next_turn }
            }
        };
        self.options = self.table.options();
        debug!(seat, options = self.options.len(), "step applied");
        Ok(step)
    }
}
