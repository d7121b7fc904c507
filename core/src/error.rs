use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Dictionary is empty")]
    EmptyDictionary,
    #[error("Round is not in the playing phase")]
    RoundNotActive,
    #[error("Malformed config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, GameError>;
