#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use session::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod minefield;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Width and height are raised to at least 1, mines are capped at the board area.
    pub fn new((size_x, size_y): Coord2, mines: CellCount) -> Self {
        let size_x = size_x.max(1);
        let size_y = size_y.max(1);
        let total = mult(size_x, size_y);
        if mines > total {
            log::warn!("Requested {} mines but the board only fits {}", mines, total);
        }
        Self::new_unchecked((size_x, size_y), mines.min(total))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Result of the flag command, which chords instead when aimed at a revealed cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
    Chorded(RevealOutcome),
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flagged | Self::Unflagged => true,
            Self::Chorded(outcome) => outcome.has_update(),
        }
    }
}
