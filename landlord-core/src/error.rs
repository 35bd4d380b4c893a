use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("the play uses cards the player does not hold")]
    CardsNotOwned,
    #[error("the cards do not form a playable shape")]
    InvalidPlay,
    #[error("the play does not beat the previous play")]
    MustBeatPrevious,
    #[error("the game is already over")]
    GameOver,
    #[error("the leading player cannot pass")]
    CannotPass,
}
