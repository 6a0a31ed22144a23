use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be at least 1x1 and at most {max}x{max}", max = crate::Coord::MAX)]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
