use thiserror::Error;

/// Errors surfaced by the engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// The shoe was asked to hold an unusable number of decks. Fatal at
    /// construction time, never mid-game.
    #[error("cannot build a shoe from {0} decks")]
    InvalidDeckCount(usize),
    /// The shoe ran dry even after a reshuffle. The cut-card check makes
    /// this unreachable in correct operation.
    #[error("shoe exhausted after reshuffle")]
    ShoeExhausted,
    /// An action token outside the playing vocabulary.
    #[error("unrecognized action '{0}'")]
    UnknownAction(String),
}
