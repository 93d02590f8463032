use serde::{Deserialize, Serialize};

use crate::PieceId;

/// Canonical occupancy stored by the engine for every grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Outside the board mask, never part of the game.
    #[default]
    Invalid,
    Empty,
    Occupied(PieceId),
}

impl Cell {
    pub const fn piece(self) -> Option<PieceId> {
        match self {
            Self::Occupied(id) => Some(id),
            Self::Invalid | Self::Empty => None,
        }
    }
}
