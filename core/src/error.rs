use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape is empty or rows differ in length")]
    InvalidBoardShape,
    #[error("Board does not fit into the coordinate range")]
    BoardTooLarge,
    #[error("Starting hole is not a playable cell")]
    UnplayableStart,
    #[error("Unexpected layout character {0:?}")]
    InvalidLayoutChar(char),
    #[error("Layout has no starting hole")]
    MissingStartHole,
    #[error("Layout has more than one starting hole")]
    DuplicateStartHole,
}

pub type Result<T> = core::result::Result<T, GameError>;
